pub trait Applier<T> {
    fn apply(&mut self, patch: T);
}
