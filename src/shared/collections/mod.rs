/// Bounded collections shared across layers
///
/// - RingBuffer: fixed-capacity, overwrite-oldest circular buffer

pub mod ringbuffer;

pub use ringbuffer::RingBuffer;
