// body/trail.rs
// Bounded trajectory buffer for the tracer

use std::collections::VecDeque;

use ultraviolet::Vec2;

/// Fixed-capacity FIFO ring of past positions. Once full, pushing a new
/// point evicts the oldest one.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Oldest-first iteration over the recorded points.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first_at_capacity() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn never_grows_past_capacity() {
        let mut trail = Trail::new(8);
        for i in 0..1000 {
            trail.push(Vec2::new(0.0, i as f32));
            assert!(trail.len() <= 8);
        }
        assert_eq!(trail.latest(), Some(Vec2::new(0.0, 999.0)));
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut trail = Trail::new(4);
        trail.push(Vec2::zero());
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.latest(), None);
    }
}
