// Page lifecycle decisions for the frame loops.

/// Whether a `pagehide` cancels the frame loops. A persisted page goes into
/// the back/forward cache and resumes with its loops when shown again.
#[inline]
pub fn stops_loops_on_pagehide(persisted: bool) -> bool {
    !persisted
}
