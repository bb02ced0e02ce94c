/// Position within the testimonial slider.
///
/// Indices wrap in both directions; an empty slider stays at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// Start at `index`, normalized modulo `len`.
    pub fn new(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { len, index }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self { len: self.len, index: (self.index + 1) % self.len }
    }

    pub fn prev(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        Self { len: self.len, index: (self.index + self.len - 1) % self.len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_from_last_wraps_to_first() {
        for n in 1..8 {
            assert_eq!(Carousel::new(n, n - 1).next().index(), 0);
        }
    }

    #[test]
    fn backward_from_first_wraps_to_last() {
        for n in 1..8 {
            assert_eq!(Carousel::new(n, 0).prev().index(), n - 1);
        }
    }

    #[test]
    fn next_then_prev_is_identity() {
        let n = 5;
        for i in 0..n {
            let c = Carousel::new(n, i);
            assert_eq!(c.next().prev(), c);
            assert_eq!(c.prev().next(), c);
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let start = Carousel::new(4, 2);
        let mut c = start;
        for _ in 0..4 {
            c = c.next();
        }
        assert_eq!(c, start);
    }

    #[test]
    fn out_of_range_index_is_normalized() {
        assert_eq!(Carousel::new(3, 7).index(), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let c = Carousel::new(0, 4);
        assert!(c.is_empty());
        assert_eq!(c.index(), 0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
    }
}
