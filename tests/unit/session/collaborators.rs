//! Tests for the reference layout and scheduler implementations

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use tileswap::interaction::{Point, Rect, TimerToken};
    use tileswap::session::{DeadlineScheduler, Layout, Scheduler, UniformGridLayout};

    // Tests slot rects are laid out row by row
    // Verified by swapping column and row
    #[test]
    fn test_slot_rect_follows_row_major_order() {
        let layout = UniformGridLayout::new(Point::new(10.0, 20.0), 50.0, 40.0);

        assert_eq!(layout.slot_rect(0, 3), Rect::new(10.0, 20.0, 50.0, 40.0));
        assert_eq!(layout.slot_rect(5, 3), Rect::new(110.0, 60.0, 50.0, 40.0));
        assert_eq!(layout.slot_rect(7, 3), Rect::new(60.0, 100.0, 50.0, 40.0));
    }

    // Tests hit testing inside and just outside the grid
    // Verified by using inclusive right edges
    #[test]
    fn test_slot_at_hits_and_misses() {
        let layout = UniformGridLayout::new(Point::new(0.0, 0.0), 100.0, 100.0);

        assert_eq!(layout.slot_at(Point::new(0.0, 0.0), 4), Some(0));
        assert_eq!(layout.slot_at(Point::new(399.0, 399.0), 4), Some(15));
        assert_eq!(layout.slot_at(Point::new(150.0, 250.0), 4), Some(9));
        assert_eq!(layout.slot_at(Point::new(400.0, 10.0), 4), None);
        assert_eq!(layout.slot_at(Point::new(-0.5, 10.0), 4), None);
    }

    // Tests slot centres hit their own slot
    #[test]
    fn test_slot_at_agrees_with_slot_rect() {
        let layout = UniformGridLayout::new(Point::new(5.0, 5.0), 30.0, 20.0);

        for slot in 0..9 {
            let rect = layout.slot_rect(slot, 3);
            let centre = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
            assert_eq!(layout.slot_at(centre, 3), Some(slot));
        }
    }

    // Tests a zero-width layout hits nothing
    // Verified by dividing by the zero width
    #[test]
    fn test_degenerate_layout_hits_nothing() {
        let layout = UniformGridLayout::new(Point::new(0.0, 0.0), 0.0, 100.0);

        assert_eq!(layout.slot_at(Point::new(0.0, 0.0), 2), None);
    }

    // Tests due timers come back earliest first and later ones stay pending
    // Verified by returning timers in insertion order
    #[test]
    fn test_deadline_scheduler_expires_in_order() {
        let mut scheduler = DeadlineScheduler::new();
        scheduler.schedule(TimerToken::new(2), Duration::from_millis(20));
        scheduler.schedule(TimerToken::new(1), Duration::ZERO);
        scheduler.schedule(TimerToken::new(3), Duration::from_secs(3600));

        let due = scheduler.expired(Instant::now() + Duration::from_secs(1));

        assert_eq!(due, vec![TimerToken::new(1), TimerToken::new(2)]);
        assert_eq!(scheduler.pending().collect::<Vec<_>>(), vec![TimerToken::new(3)]);
    }

    // Tests cancelled timers never expire
    // Verified by ignoring cancel
    #[test]
    fn test_cancelled_timer_never_expires() {
        let mut scheduler = DeadlineScheduler::default();
        scheduler.schedule(TimerToken::new(7), Duration::ZERO);

        scheduler.cancel(TimerToken::new(7));
        scheduler.cancel(TimerToken::new(99));

        assert!(scheduler.expired(Instant::now() + Duration::from_secs(1)).is_empty());
    }

    // Tests non-finite pointer coordinates never resolve to a slot
    // Verified by comparing bounds with plain less-than checks
    #[test]
    fn test_slot_at_rejects_non_finite_points() {
        let layout = UniformGridLayout::new(Point::new(0.0, 0.0), 100.0, 100.0);

        assert_eq!(layout.slot_at(Point::new(f32::NAN, f32::NAN), 2), None);
        assert_eq!(layout.slot_at(Point::new(f32::NAN, 50.0), 2), None);
        assert_eq!(layout.slot_at(Point::new(50.0, f32::NAN), 2), None);
        assert_eq!(layout.slot_at(Point::new(f32::INFINITY, 50.0), 2), None);
        assert_eq!(layout.slot_at(Point::new(50.0, f32::NEG_INFINITY), 2), None);
    }

    // Tests an unrepresentable deadline is dropped instead of overflowing
    // Verified by adding the delay to the clock unchecked
    #[test]
    fn test_schedule_with_overflowing_delay() {
        let mut scheduler = DeadlineScheduler::new();

        scheduler.schedule(TimerToken::new(1), Duration::MAX);

        assert_eq!(scheduler.pending().count(), 0);
    }
}
