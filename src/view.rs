//! The [`View`] type: a non-owning window over externally owned bytes.

use core::cmp::{min, Ordering};
use core::fmt;
use core::slice;

use crate::search;
use crate::search::byteset;
use crate::token::{RTokens, Tokens};

/// The empty view points here, so `as_ptr` always yields one readable
/// byte, and that byte is a terminator.
const NUL: &[u8; 1] = &[0];

/// A non-owning view over a run of bytes.
///
/// A view is a `(pointer, length)` pair borrowing bytes somebody else
/// owns; it is `Copy`, 16 bytes, and free to create. Reassigning a view
/// never touches the underlying bytes, and no operation here reads outside
/// them. The borrow checker ties each view to its backing storage, so a
/// view cannot outlive the bytes it watches.
///
/// Byte positions are reported as offsets; misses are `None`. Out-of-range
/// positions fed *in* are saturated rather than rejected: [`at`] hands back
/// NUL, [`substr`] clamps both bounds, [`remove_prefix`] and
/// [`remove_suffix`] stop at the ends.
///
/// # Examples
///
/// ```
/// use strview::View;
///
/// let hay = View::new(b"hello world");
/// assert_eq!(hay.find(0, View::new(b"world")), Some(6));
/// assert_eq!(hay.substr(6, 100), "world");
/// assert!(hay.starts_with(View::new(b"hell")));
/// ```
///
/// [`at`]: View::at
/// [`substr`]: View::substr
/// [`remove_prefix`]: View::remove_prefix
/// [`remove_suffix`]: View::remove_suffix
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct View<'a> {
    bytes: &'a [u8],
}

impl<'a> View<'a> {
    /// View over all of `bytes`.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> View<'a> {
        View { bytes }
    }

    /// The empty view.
    ///
    /// Unlike `View::new(&[])`, its pointer refers to a static NUL byte,
    /// so callers handing `as_ptr()` to C-style consumers always pass a
    /// dereferenceable, terminated (zero-length) string.
    pub const fn empty() -> View<'static> {
        // Length 0 of a 1-byte static: trivially in bounds.
        View {
            bytes: unsafe { slice::from_raw_parts(NUL.as_ptr(), 0) },
        }
    }

    /// View over `bytes` up to, but not including, the first NUL; all of
    /// `bytes` when no NUL is present.
    pub fn from_terminated(bytes: &'a [u8]) -> View<'a> {
        let len = memchr::memchr(0, bytes).unwrap_or(bytes.len());
        View {
            bytes: &bytes[..len],
        }
    }

    /// Like [`from_terminated`], but never looks past the first `n` bytes,
    /// even when no NUL was seen.
    ///
    /// [`from_terminated`]: View::from_terminated
    pub fn from_bounded(bytes: &'a [u8], n: usize) -> View<'a> {
        View::from_terminated(&bytes[..min(n, bytes.len())])
    }

    /// First token of `src` when split on `delim`, or the empty view at
    /// the end of `src` when it holds nothing but delimiters.
    pub fn from_delimiter(src: View<'a>, delim: View<'_>) -> View<'a> {
        src.tokens(delim)
            .next()
            .unwrap_or_else(|| src.substr(src.len(), 0))
    }

    /// View over the bytes at `ptr` up to the first NUL. A null `ptr`
    /// yields the empty view.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point at a NUL-terminated buffer that lives
    /// for `'a` and is not written to while the view is.
    pub unsafe fn from_ptr(ptr: *const libc::c_char) -> View<'a> {
        if ptr.is_null() {
            return View::empty();
        }
        let len = unsafe { libc::strlen(ptr) };
        View {
            bytes: unsafe { slice::from_raw_parts(ptr.cast::<u8>(), len) },
        }
    }

    /// Number of bytes the view covers. Never counts a terminator.
    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view covers zero bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `len() + 1`: the buffer size [`fill`] needs to preserve every byte.
    /// Purely a reporting value; the viewed region itself need not be
    /// terminated.
    ///
    /// [`fill`]: View::fill
    #[inline]
    pub const fn len_with_nul(&self) -> usize {
        self.bytes.len() + 1
    }

    /// The viewed bytes as a slice.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Pointer to the first viewed byte.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Byte at `i`, or NUL when `i` is out of range.
    #[inline]
    pub fn at(&self, i: usize) -> u8 {
        self.bytes.get(i).copied().unwrap_or(0)
    }

    /// Byte at `i`, when in range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<u8> {
        self.bytes.get(i).copied()
    }

    /// Three-way byte comparison; the same order [`Ord`] implements.
    #[inline]
    pub fn compare(&self, other: &View<'_>) -> Ordering {
        self.bytes.cmp(other.bytes)
    }

    /// Compare at most `n` bytes of each view, the `strncmp` way: views
    /// that agree on their first `n` bytes — or exhaust together inside
    /// those `n` — are equal.
    pub fn compare_limited(&self, other: &View<'_>, n: usize) -> Ordering {
        let a = &self.bytes[..min(n, self.bytes.len())];
        let b = &other.bytes[..min(n, other.bytes.len())];
        a.cmp(b)
    }

    /// Substring of at most `count` bytes starting at `pos`. `pos` past
    /// the end yields the empty view one past the last byte; `count` is
    /// clamped to the bytes that remain.
    pub fn substr(&self, pos: usize, count: usize) -> View<'a> {
        let pos = min(pos, self.bytes.len());
        let count = min(count, self.bytes.len() - pos);
        View {
            bytes: &self.bytes[pos..pos + count],
        }
    }

    /// Drop the first `n` bytes, or all of them when `n >= len()`.
    pub fn remove_prefix(&self, n: usize) -> View<'a> {
        View {
            bytes: &self.bytes[min(n, self.bytes.len())..],
        }
    }

    /// Drop the last `n` bytes, or all of them when `n >= len()`.
    pub fn remove_suffix(&self, n: usize) -> View<'a> {
        View {
            bytes: &self.bytes[..self.bytes.len() - min(n, self.bytes.len())],
        }
    }

    /// Whether the view begins with `prefix`. False when `prefix` is
    /// longer than the view.
    #[inline]
    pub fn starts_with(&self, prefix: View<'_>) -> bool {
        self.bytes.starts_with(prefix.bytes)
    }

    /// Whether the view ends with `suffix`. False when `suffix` is longer
    /// than the view.
    #[inline]
    pub fn ends_with(&self, suffix: View<'_>) -> bool {
        self.bytes.ends_with(suffix.bytes)
    }

    /// Offset of the first occurrence of `needle` starting at or after
    /// `pos`. The empty needle matches immediately at `pos` (clamped to
    /// the end).
    pub fn find(&self, pos: usize, needle: View<'_>) -> Option<usize> {
        let pos = min(pos, self.bytes.len());
        search::find(&self.bytes[pos..], needle.bytes).map(|i| pos + i)
    }

    /// Offset of the last occurrence of `needle` starting at or before
    /// `pos`. The empty needle matches immediately at `pos` (clamped to
    /// the end).
    pub fn rfind(&self, pos: usize, needle: View<'_>) -> Option<usize> {
        if needle.is_empty() {
            return Some(min(pos, self.bytes.len()));
        }
        let end = min(self.bytes.len(), pos.saturating_add(needle.len()));
        search::rfind(&self.bytes[..end], needle.bytes)
    }

    /// Whether `needle` occurs anywhere in the view. Always true for the
    /// empty needle.
    #[inline]
    pub fn contains(&self, needle: View<'_>) -> bool {
        self.find(0, needle).is_some()
    }

    /// View over the first occurrence of `needle`, or the empty view at
    /// the end when there is none.
    pub fn find_match(&self, needle: View<'_>) -> View<'a> {
        match self.find(0, needle) {
            Some(k) => self.substr(k, needle.len()),
            None => self.substr(self.bytes.len(), 0),
        }
    }

    /// Length of the leading run made only of bytes in `set`.
    #[inline]
    pub fn span(&self, set: View<'_>) -> usize {
        byteset::span(self.bytes, set.bytes)
    }

    /// Length of the leading run that avoids every byte in `set`.
    #[inline]
    pub fn cspan(&self, set: View<'_>) -> usize {
        byteset::cspan(self.bytes, set.bytes)
    }

    /// Offset of the first byte that is in `set`.
    pub fn find_first_of(&self, set: View<'_>) -> Option<usize> {
        let k = byteset::cspan(self.bytes, set.bytes);
        if k < self.bytes.len() {
            Some(k)
        } else {
            None
        }
    }

    /// Offset of the first byte that is not in `set`.
    pub fn find_first_not_of(&self, set: View<'_>) -> Option<usize> {
        let k = byteset::span(self.bytes, set.bytes);
        if k < self.bytes.len() {
            Some(k)
        } else {
            None
        }
    }

    /// Offset of the last byte that is in `set`.
    #[inline]
    pub fn find_last_of(&self, set: View<'_>) -> Option<usize> {
        byteset::rfind_in(self.bytes, set.bytes)
    }

    /// Offset of the last byte that is not in `set`.
    #[inline]
    pub fn find_last_not_of(&self, set: View<'_>) -> Option<usize> {
        byteset::rfind_not_in(self.bytes, set.bytes)
    }

    /// Regrow the view to the full NUL-terminated buffer it points into:
    /// the length becomes the distance from the view's first byte to the
    /// first NUL. Meant for views whose backing buffer is known to be
    /// terminated while the view itself was carved shorter.
    ///
    /// # Safety
    ///
    /// The backing buffer must contain a NUL at or after the view's first
    /// byte, every byte up to that NUL must live for `'a`, and none of
    /// them may be written to while the view is alive.
    pub unsafe fn extend(&self) -> View<'a> {
        let len = unsafe { libc::strlen(self.bytes.as_ptr().cast()) };
        View {
            bytes: unsafe { slice::from_raw_parts(self.bytes.as_ptr(), len) },
        }
    }

    /// Copy into `dest` as a NUL-terminated C string: at most
    /// `dest.len() - 1` view bytes, then one NUL. Returns how many view
    /// bytes were preserved. An empty `dest` is left untouched; a one-byte
    /// `dest` receives only the terminator.
    pub fn fill(&self, dest: &mut [u8]) -> usize {
        if dest.is_empty() {
            return 0;
        }
        let n = min(dest.len() - 1, self.bytes.len());
        dest[..n].copy_from_slice(&self.bytes[..n]);
        dest[n] = 0;
        n
    }

    /// Forward tokenizer: the non-empty spans of the view separated by
    /// whole copies of `delim`, delimiter runs collapsed. See [`Tokens`].
    #[inline]
    pub fn tokens<'d>(&self, delim: View<'d>) -> Tokens<'a, 'd> {
        Tokens::new(self.bytes, delim.bytes)
    }

    /// Reverse tokenizer: the tokens of [`tokens`], walked from the end of
    /// the view. See [`RTokens`].
    ///
    /// [`tokens`]: View::tokens
    #[inline]
    pub fn rtokens<'d>(&self, delim: View<'d>) -> RTokens<'a, 'd> {
        RTokens::new(self.bytes, delim.bytes)
    }
}

impl Default for View<'_> {
    fn default() -> Self {
        View::empty()
    }
}

impl<'a> From<&'a [u8]> for View<'a> {
    fn from(bytes: &'a [u8]) -> View<'a> {
        View::new(bytes)
    }
}

impl<'a> From<&'a str> for View<'a> {
    fn from(s: &'a str) -> View<'a> {
        View::new(s.as_bytes())
    }
}

impl AsRef<[u8]> for View<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl PartialEq<[u8]> for View<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for View<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl PartialEq<str> for View<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for View<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bytes {
            for c in core::ascii::escape_default(b) {
                fmt::Write::write_char(f, c as char)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}
