/// Supplies new piece values, one per call. The engine never inspects how
/// values are produced.
pub trait PieceSource<T> {
    fn next_piece(&mut self) -> T;

    /// Number of distinct values this source can yield, if known. Used to
    /// size the cascade guard.
    fn cardinality(&self) -> Option<usize> {
        None
    }
}

impl<T, F> PieceSource<T> for F
where
    F: FnMut() -> T,
{
    fn next_piece(&mut self) -> T {
        self()
    }
}
