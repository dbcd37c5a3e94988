//! core/carousel.rs
//!
//! The carousel state machine: an index counter + a play flag.
//! Every transition is a plain method, so it can be tested without a UI.
//!
//! - `len` is always passed in (the slide list lives elsewhere)
//! - `len == 0` never performs modulo arithmetic

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_playing: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: true,
        }
    }
}

impl CarouselState {
    pub fn go_to_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
    }

    pub fn go_to_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
    }

    /// Jump straight to `index`.
    /// Out-of-range input leaves the state untouched and returns false.
    pub fn go_to_slide(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            debug!(index, len, "ignoring out-of-range slide jump");
            return false;
        }
        self.current_index = index;
        true
    }

    pub fn toggle_play_pause(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn is_active(&self, position: usize) -> bool {
        self.current_index == position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize) -> CarouselState {
        CarouselState {
            current_index: index,
            is_playing: true,
        }
    }

    #[test]
    fn starts_at_zero_and_playing() {
        let s = CarouselState::default();
        assert_eq!(s.current_index, 0);
        assert!(s.is_playing);
    }

    #[test]
    fn next_n_times_is_full_cycle() {
        for len in 1..=7 {
            for k in 0..len {
                let mut s = at(k);
                for _ in 0..len {
                    s.go_to_next(len);
                }
                assert_eq!(s.current_index, k, "len={len} k={k}");
            }
        }
    }

    #[test]
    fn previous_undoes_next() {
        for len in 1..=7 {
            for k in 0..len {
                let mut s = at(k);
                s.go_to_next(len);
                s.go_to_previous(len);
                assert_eq!(s.current_index, k, "len={len} k={k}");
            }
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut s = at(0);
        s.go_to_previous(3);
        assert_eq!(s.current_index, 2);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut s = at(2);
        s.go_to_next(3);
        assert_eq!(s.current_index, 0);
    }

    #[test]
    fn index_stays_in_range_under_mixed_actions() {
        let len = 4;
        let mut s = CarouselState::default();

        // Deterministic pseudo-random walk over every action.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 4 {
                0 => s.go_to_next(len),
                1 => s.go_to_previous(len),
                2 => {
                    s.go_to_slide((seed as usize / 4) % (len + 2), len);
                }
                _ => s.toggle_play_pause(),
            }
            assert!(s.current_index < len);
        }
    }

    #[test]
    fn double_toggle_restores_play_flag() {
        let mut s = CarouselState::default();
        s.toggle_play_pause();
        assert!(!s.is_playing);
        s.toggle_play_pause();
        assert!(s.is_playing);
    }

    #[test]
    fn go_to_slide_in_range_sets_index() {
        let mut s = CarouselState::default();
        assert!(s.go_to_slide(2, 3));
        assert_eq!(s.current_index, 2);
        assert!(s.is_active(2));
        assert!(!s.is_active(0));
    }

    #[test]
    fn go_to_slide_out_of_range_is_ignored() {
        let mut s = at(1);
        assert!(!s.go_to_slide(3, 3));
        assert!(!s.go_to_slide(usize::MAX, 3));
        assert_eq!(s.current_index, 1);
    }

    #[test]
    fn empty_list_transitions_are_noops() {
        let mut s = CarouselState::default();
        s.go_to_next(0);
        s.go_to_previous(0);
        assert!(!s.go_to_slide(0, 0));
        assert_eq!(s.current_index, 0);
    }
}
