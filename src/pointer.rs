//! Pointer identity and the host pointer-capture collaborator.

use thiserror::Error;

/// Identity of one pointing device interacting with the host surface.
///
/// Hosts with several concurrent pointers (multi-touch) hand each stream its
/// own id. Sessions only advance for the id they captured, so streams from
/// other pointers never cross-talk into an active drag or resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerId(pub u32);

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("pointer {0:?} is not captured")]
    NotCaptured(PointerId),
    #[error("pointer capture backend error: {0}")]
    Backend(String),
}

/// Host pointer-capture primitive.
///
/// Capturing routes all further move/up events for a pointer id to the
/// capturing target until released. The contract is best-effort: session
/// bookkeeping keeps its own identity guard and stays correct even when the
/// host primitive is imperfect. Releasing an already-released pointer is not
/// a reportable condition; callers swallow the error.
pub trait PointerCapture {
    fn capture(&mut self, pointer: PointerId) -> Result<(), CaptureError>;
    fn release(&mut self, pointer: PointerId) -> Result<(), CaptureError>;
}

impl<T: PointerCapture + ?Sized> PointerCapture for &mut T {
    fn capture(&mut self, pointer: PointerId) -> Result<(), CaptureError> {
        (**self).capture(pointer)
    }

    fn release(&mut self, pointer: PointerId) -> Result<(), CaptureError> {
        (**self).release(pointer)
    }
}

/// Capture implementation for hosts without a capture primitive. Both calls
/// succeed without doing anything; the sessions' identity guard carries the
/// exclusivity on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCapture;

impl PointerCapture for NullCapture {
    fn capture(&mut self, _pointer: PointerId) -> Result<(), CaptureError> {
        Ok(())
    }

    fn release(&mut self, _pointer: PointerId) -> Result<(), CaptureError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        fn capture_via_ref(capture: &mut impl PointerCapture) -> Result<(), CaptureError> {
            capture.capture(PointerId(7))
        }
        let mut capture = NullCapture;
        assert!(capture_via_ref(&mut capture).is_ok());
        assert!(capture.release(PointerId(7)).is_ok());
    }
}
