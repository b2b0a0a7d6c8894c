//! Modal state
//!
//! Visibility and position per named modal. Positions are randomized on
//! open within a bounded offset from the content origin.

use rand::Rng;

/// Named modals known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Terms of service, opened from the signup form.
    Terms,
    /// Informational modal owned by the header.
    Info,
}

impl ModalId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Terms => "terms-modal",
            Self::Info => "info-modal",
        }
    }
}

/// Offset of a modal's top-left corner from the content origin, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalPosition {
    pub top: u16,
    pub left: u16,
}

impl ModalPosition {
    /// Draw each axis uniformly from `min..=max`.
    pub fn random(rng: &mut impl Rng, min: u16, max: u16) -> Self {
        Self {
            top: rng.gen_range(min..=max),
            left: rng.gen_range(min..=max),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub visible: bool,
    pub position: ModalPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_position_stays_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let pos = ModalPosition::random(&mut rng, 10, 30);
            assert!((10..=30).contains(&pos.top));
            assert!((10..=30).contains(&pos.left));
        }
    }

    #[test]
    fn test_modal_names() {
        assert_eq!(ModalId::Terms.name(), "terms-modal");
        assert_eq!(ModalId::Info.name(), "info-modal");
    }
}
