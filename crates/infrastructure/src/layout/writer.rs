use libc::c_char;
use nss_kubernetes_domain::DomainError;
use smallvec::SmallVec;
use std::marker::PhantomData;
use std::mem::{align_of, size_of};
use std::ptr;
use tracing::trace;

pub const POINTER_WIDTH: usize = size_of::<*mut c_char>();

/// Rounds `size` up to the next multiple of the pointer width.
pub const fn align_up(size: usize) -> usize {
    (size + POINTER_WIDTH - 1) & !(POINTER_WIDTH - 1)
}

/// Bytes to skip at `ptr` before the first pointer-aligned address.
fn leading_padding(ptr: *const u8) -> usize {
    match ptr as usize % POINTER_WIDTH {
        0 => 0,
        misalignment => POINTER_WIDTH - misalignment,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// NUL-terminated string; the length excludes the terminator.
    CStr(usize),
    /// Raw bytes, e.g. an address in network order.
    Bytes(usize),
    /// `n` pointers followed by a null sentinel.
    PointerArray(usize),
    /// One C struct.
    Struct { size: usize, align: usize },
}

impl Segment {
    pub fn of<T>() -> Self {
        Segment::Struct {
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }

    pub fn size(&self) -> usize {
        match *self {
            Segment::CStr(len) => len + 1,
            Segment::Bytes(len) => len,
            Segment::PointerArray(entries) => (entries + 1) * POINTER_WIDTH,
            Segment::Struct { size, .. } => size,
        }
    }

    pub fn aligned_size(&self) -> usize {
        align_up(self.size())
    }
}

/// Ordered list of the segments a record will occupy.
#[derive(Debug, Clone, Default)]
pub struct LayoutPlan {
    segments: SmallVec<[Segment; 6]>,
}

impl LayoutPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn segments<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        self.segments.extend(segments);
        self
    }

    /// Bytes a pointer-aligned buffer needs to hold the whole record.
    pub fn required_size(&self) -> usize {
        self.segments.iter().map(Segment::aligned_size).sum()
    }

    /// Bytes `buffer` needs, counting the padding that aligns its start.
    pub fn required_for(&self, buffer: &[u8]) -> usize {
        leading_padding(buffer.as_ptr()) + self.required_size()
    }
}

/// Writes the segments of a [`LayoutPlan`] back to back into a buffer and
/// hands out pointers to them, so later segments (pointer arrays, the
/// record struct) can refer to earlier ones.
///
/// Writing a segment that is not the next planned one, overrunning the
/// planned end, or finishing anywhere but exactly on it are bugs in the
/// caller and panic.
pub struct RecordLayoutWriter<'buf> {
    base: *mut u8,
    segments: SmallVec<[Segment; 6]>,
    next: usize,
    cursor: usize,
    end: usize,
    _buffer: PhantomData<&'buf mut [u8]>,
}

impl<'buf> RecordLayoutWriter<'buf> {
    /// Fails with [`DomainError::BufferTooSmall`], leaving `buffer`
    /// untouched, when the planned record does not fit.
    pub fn new(buffer: &'buf mut [u8], plan: LayoutPlan) -> Result<Self, DomainError> {
        let start = leading_padding(buffer.as_ptr());
        let end = start + plan.required_size();

        if buffer.len() < end {
            return Err(DomainError::BufferTooSmall {
                required: end,
                available: buffer.len(),
            });
        }

        Ok(Self {
            base: buffer.as_mut_ptr(),
            segments: plan.segments,
            next: 0,
            cursor: start,
            end,
            _buffer: PhantomData,
        })
    }

    fn claim(&mut self, segment: Segment) -> *mut u8 {
        assert_eq!(
            self.segments.get(self.next),
            Some(&segment),
            "record layout: segment {} does not match the plan",
            self.next
        );

        let aligned = segment.aligned_size();
        assert!(
            self.cursor + aligned <= self.end,
            "record layout: segment {} overruns the computed end",
            self.next
        );

        // SAFETY: cursor + aligned <= end <= buffer length (checked in new()).
        let start = unsafe { self.base.add(self.cursor) };
        // Zeroing the whole span covers terminators, sentinels and padding.
        // SAFETY: same span as above.
        unsafe { ptr::write_bytes(start, 0, aligned) };

        self.next += 1;
        self.cursor += aligned;
        start
    }

    pub fn write_c_str(&mut self, value: &str) -> *mut c_char {
        let start = self.claim(Segment::CStr(value.len()));
        // SAFETY: claim() reserved value.len() + 1 bytes; the terminator is
        // already zero.
        unsafe { ptr::copy_nonoverlapping(value.as_ptr(), start, value.len()) };
        start.cast()
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> *mut c_char {
        let start = self.claim(Segment::Bytes(bytes.len()));
        // SAFETY: claim() reserved bytes.len() bytes.
        unsafe { ptr::copy_nonoverlapping(bytes.as_ptr(), start, bytes.len()) };
        start.cast()
    }

    /// Writes `entries` plus the terminating null pointer.
    pub fn write_pointer_array(&mut self, entries: &[*mut c_char]) -> *mut *mut c_char {
        let slots = self
            .claim(Segment::PointerArray(entries.len()))
            .cast::<*mut c_char>();

        for (i, entry) in entries.iter().enumerate() {
            // SAFETY: claim() reserved entries.len() + 1 pointer-aligned slots.
            unsafe { slots.add(i).write(*entry) };
        }
        // SAFETY: the sentinel is the last reserved slot.
        unsafe { slots.add(entries.len()).write(ptr::null_mut()) };

        slots
    }

    pub fn write_struct<T: Copy>(&mut self, value: T) -> *mut T {
        assert!(
            align_of::<T>() <= POINTER_WIDTH,
            "record layout: struct alignment exceeds pointer width"
        );

        let slot = self.claim(Segment::of::<T>()).cast::<T>();
        // SAFETY: claim() reserved size_of::<T>() bytes at a pointer-aligned
        // offset, which satisfies align_of::<T>().
        unsafe { slot.write(value) };
        slot
    }

    /// Checks the record was written exactly as planned and returns the
    /// number of buffer bytes it occupies.
    pub fn finish(self) -> usize {
        assert_eq!(
            self.next,
            self.segments.len(),
            "record layout: planned segments left unwritten"
        );
        assert_eq!(
            self.cursor, self.end,
            "record layout: cursor does not land on the computed end"
        );

        trace!(bytes = self.end, segments = self.next, "Record layout written");
        self.end
    }
}
