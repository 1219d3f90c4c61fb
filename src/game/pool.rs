//! Obstacle pool
//!
//! A fixed-capacity freelist of reusable obstacle actors. Obstacles are
//! allocated once per session and then cycle between the free list and the
//! active path; nothing is ever dropped mid-session, so steady-state play
//! allocates nothing.
//!
//! Invariant: every slot is in exactly one of {free, active}, so
//! `free_len() + active_len() == capacity()` at all times.

use macroquad::prelude::Vec3;

/// Handle to a pooled obstacle slot.
pub type ObstacleId = usize;

/// One obstacle actor. Position and rotation are local to the highway drum;
/// the world-space position is derived from the drum's current rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Obstacle {
    /// Lane index the obstacle was spawned into
    pub lane: usize,
    /// Position relative to the (unrotated) drum
    pub local_position: Vec3,
    /// Counter-rotation about the drum axis so the car sits upright
    pub rotation: f32,
    /// Cleared while the obstacle is parked in the pool
    pub visible: bool,
}

/// Fixed-capacity pool of obstacle slots with a LIFO free list.
#[derive(Debug)]
pub struct ObstaclePool {
    slots: Vec<Obstacle>,
    free: Vec<ObstacleId>,
    active: Vec<ObstacleId>,
}

impl ObstaclePool {
    /// Default pool size; the road never shows more cars than this.
    pub const DEFAULT_CAPACITY: usize = 15;

    /// Create a pool with every slot parked and invisible.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Obstacle::default(); capacity],
            free: (0..capacity).rev().collect(),
            active: Vec::with_capacity(capacity),
        }
    }

    /// Take one obstacle out of the pool, marking it active.
    ///
    /// Returns `None` when the pool is exhausted - the caller simply spawns
    /// fewer obstacles that tick.
    pub fn acquire(&mut self) -> Option<ObstacleId> {
        let id = self.free.pop()?;
        self.active.push(id);
        Some(id)
    }

    /// Park an obstacle back in the pool, clearing its visibility.
    ///
    /// Releasing an id that is not active (including a double release) is a
    /// no-op.
    pub fn release(&mut self, id: ObstacleId) {
        let Some(pos) = self.active.iter().position(|&a| a == id) else {
            return;
        };
        self.active.swap_remove(pos);
        self.slots[id].visible = false;
        self.free.push(id);
    }

    pub fn get(&self, id: ObstacleId) -> &Obstacle {
        &self.slots[id]
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> &mut Obstacle {
        &mut self.slots[id]
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Active obstacles with their ids.
    pub fn iter_active(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        self.active.iter().map(move |&id| (id, &self.slots[id]))
    }
}

impl Default for ObstaclePool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership_holds(pool: &ObstaclePool) -> bool {
        pool.free_len() + pool.active_len() == pool.capacity()
    }

    #[test]
    fn acquire_and_release_preserve_capacity() {
        let mut pool = ObstaclePool::new(15);
        assert!(membership_holds(&pool));

        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        assert_ne!(a, b);
        assert_eq!(pool.active_len(), 2);
        assert!(membership_holds(&pool));

        pool.release(a);
        assert_eq!(pool.active_len(), 1);
        assert!(membership_holds(&pool));
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let mut pool = ObstaclePool::new(3);
        for _ in 0..3 {
            assert!(pool.acquire().is_some());
        }
        let before = pool.active_len();
        assert!(pool.acquire().is_none());
        assert_eq!(pool.active_len(), before);
        assert!(membership_holds(&pool));
    }

    #[test]
    fn double_release_is_a_noop() {
        let mut pool = ObstaclePool::new(4);
        let id = pool.acquire().unwrap();
        pool.release(id);
        pool.release(id);
        assert_eq!(pool.free_len(), 4);
        assert_eq!(pool.active_len(), 0);
        assert!(membership_holds(&pool));
    }

    #[test]
    fn release_clears_visibility() {
        let mut pool = ObstaclePool::new(2);
        let id = pool.acquire().unwrap();
        pool.get_mut(id).visible = true;
        pool.release(id);
        assert!(!pool.get(id).visible);
    }

    #[test]
    fn recycled_slots_are_reused() {
        let mut pool = ObstaclePool::new(1);
        let a = pool.acquire().unwrap();
        assert!(pool.acquire().is_none());
        pool.release(a);
        let b = pool.acquire().unwrap();
        assert_eq!(a, b);
    }
}
