use crate::core::backends::kinds::Backend;
use std::num::NonZeroUsize;

/// Worker count for one threaded pass: the machine's parallelism (or the
/// override), limited to `wide_cap` for the wide backend.
pub fn calculate_threads_for_render(
    backend: Backend,
    thread_override: Option<NonZeroUsize>,
    wide_cap: NonZeroUsize,
) -> NonZeroUsize {
    let available = thread_override
        .or_else(|| std::thread::available_parallelism().ok())
        .unwrap_or(NonZeroUsize::MIN);

    match backend {
        Backend::Wide => available.min(wide_cap),
        Backend::Scalar | Backend::Narrow => available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn test_override_wins_over_detected_parallelism() {
        assert_eq!(
            calculate_threads_for_render(Backend::Scalar, Some(n(3)), n(8)),
            n(3)
        );
    }

    #[test]
    fn test_wide_backend_is_capped() {
        assert_eq!(
            calculate_threads_for_render(Backend::Wide, Some(n(32)), n(8)),
            n(8)
        );
        assert_eq!(
            calculate_threads_for_render(Backend::Wide, Some(n(2)), n(8)),
            n(2)
        );
    }

    #[test]
    fn test_other_backends_are_not_capped() {
        assert_eq!(
            calculate_threads_for_render(Backend::Narrow, Some(n(32)), n(8)),
            n(32)
        );
    }

    #[test]
    fn test_sanity_check() {
        let num_avail_threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        let threads = calculate_threads_for_render(Backend::Scalar, None, n(8));

        assert_eq!(threads.get(), num_avail_threads);
    }
}
