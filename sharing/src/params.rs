use crate::error::{SharingError, SharingResult};

/// Validate the relation between threshold and share counts.
pub fn validate_threshold_config(threshold: usize, share_count: usize) -> bool {
    (1..=share_count).contains(&threshold)
}

/// Construction-time check shared by both dispersal schemes.
pub(crate) fn check_scheme_config(
    threshold: usize,
    share_count: usize,
    max_share_count: usize,
) -> SharingResult<()> {
    if !validate_threshold_config(threshold, share_count) {
        return Err(SharingError::InvalidThreshold {
            threshold,
            share_count,
        });
    }
    if share_count > max_share_count {
        return Err(SharingError::UnsupportedShareCount {
            requested: share_count,
            max: max_share_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_threshold_config_accepts_expected_inputs() {
        assert!(validate_threshold_config(1, 1));
        assert!(validate_threshold_config(2, 2));
        assert!(validate_threshold_config(3, 4));
        assert!(validate_threshold_config(2, 100));
        assert!(validate_threshold_config(100, 100));
    }

    #[test]
    fn validate_threshold_config_rejects_bad_inputs() {
        assert!(!validate_threshold_config(0, 4));
        assert!(!validate_threshold_config(5, 4));
        assert!(!validate_threshold_config(1, 0));
    }

    #[test]
    fn scheme_config_errors_carry_the_offending_values() {
        assert_eq!(
            Err(SharingError::InvalidThreshold {
                threshold: 5,
                share_count: 4,
            }),
            check_scheme_config(5, 4, 256)
        );
        assert_eq!(
            Err(SharingError::UnsupportedShareCount {
                requested: 300,
                max: 256,
            }),
            check_scheme_config(3, 300, 256)
        );
        assert_eq!(Ok(()), check_scheme_config(3, 4, 256));
    }
}
