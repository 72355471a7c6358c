// Run/pause bookkeeping for a loop paced by the display refresh signal.
// Keeps at most one frame request outstanding at any time.

pub trait FrameScheduler {
    type Handle: Copy;
    type Error;

    fn request_frame(&mut self) -> Result<Self::Handle, Self::Error>;

    fn cancel_frame(&mut self, handle: Self::Handle) -> Result<(), Self::Error>;
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> FrameLoop<S> {
        FrameLoop {
            scheduler,
            pending: None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Requests a frame unless one is already pending. Returns whether a new
    /// request was made.
    pub fn resume(&mut self) -> Result<bool, S::Error> {
        if self.pending.is_some() {
            return Ok(false);
        }
        self.pending = Some(self.scheduler.request_frame()?);
        Ok(true)
    }

    /// Cancels the pending frame, if any. Safe to call repeatedly.
    pub fn pause(&mut self) -> Result<(), S::Error> {
        match self.pending.take() {
            Some(handle) => self.scheduler.cancel_frame(handle),
            None => Ok(()),
        }
    }

    /// Called when the scheduled frame fires. Returns false for a frame that
    /// was not expected, which the caller should skip instead of running a
    /// second loop.
    pub fn begin_frame(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Called once the frame's work is done to request the next one.
    pub fn end_frame(&mut self) -> Result<(), S::Error> {
        self.resume().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct CountingScheduler {
        next: u32,
        outstanding: HashSet<u32>,
        requests: usize,
    }

    impl FrameScheduler for CountingScheduler {
        type Handle = u32;
        type Error = ();

        fn request_frame(&mut self) -> Result<u32, ()> {
            self.next += 1;
            self.requests += 1;
            self.outstanding.insert(self.next);
            Ok(self.next)
        }

        fn cancel_frame(&mut self, handle: u32) -> Result<(), ()> {
            self.outstanding.remove(&handle);
            Ok(())
        }
    }

    impl CountingScheduler {
        /// Fires the oldest outstanding request, as the browser would.
        fn fire(&mut self) -> Option<u32> {
            let handle = self.outstanding.iter().min().copied()?;
            self.outstanding.remove(&handle);
            Some(handle)
        }
    }

    #[test]
    fn hidden_visible_twice_keeps_one_request() {
        let mut frames = FrameLoop::new(CountingScheduler::default());
        frames.resume().unwrap();

        frames.pause().unwrap();
        assert!(frames.resume().unwrap());
        frames.pause().unwrap();
        assert!(frames.resume().unwrap());

        assert_eq!(frames.scheduler().outstanding.len(), 1);
        assert!(frames.is_running());
    }

    #[test]
    fn resume_while_running_is_a_no_op() {
        let mut frames = FrameLoop::new(CountingScheduler::default());
        assert!(frames.resume().unwrap());
        assert!(!frames.resume().unwrap());
        assert!(!frames.resume().unwrap());
        assert_eq!(frames.scheduler().requests, 1);
        assert_eq!(frames.scheduler().outstanding.len(), 1);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut frames = FrameLoop::new(CountingScheduler::default());
        frames.pause().unwrap();
        frames.resume().unwrap();
        frames.pause().unwrap();
        frames.pause().unwrap();
        assert!(!frames.is_running());
        assert!(frames.scheduler().outstanding.is_empty());
    }

    #[test]
    fn each_frame_schedules_exactly_one_successor() {
        let mut frames = FrameLoop::new(CountingScheduler::default());
        frames.resume().unwrap();
        for _ in 0..10 {
            let fired = frames.scheduler.fire();
            assert!(fired.is_some());
            assert!(frames.begin_frame());
            frames.end_frame().unwrap();
            assert_eq!(frames.scheduler().outstanding.len(), 1);
        }
        assert_eq!(frames.scheduler().requests, 11);
    }

    #[test]
    fn stray_frame_after_pause_is_skipped() {
        let mut frames = FrameLoop::new(CountingScheduler::default());
        frames.resume().unwrap();
        frames.pause().unwrap();
        assert!(!frames.begin_frame());
        assert!(!frames.is_running());
    }
}
