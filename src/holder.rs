/// A generic single-slot container.
///
/// `Holder<T>` owns at most one value of its element type `T`. The slot
/// starts out empty and is occupied by [`set`](Holder::set), which
/// overwrites any previously stored value (last write wins).
///
/// Each instantiation over a distinct `T` is monomorphized into an
/// independent type with its own storage layout, so holders over
/// different element types are never interchangeable:
///
/// ```compile_fail
/// use holdall::prelude::Holder;
///
/// let mut int_holder: Holder<i32> = Holder::new();
/// int_holder.set(1);
/// let string_holder: Holder<&str> = int_holder;
/// ```
///
/// # Example
/// ```
/// use holdall::prelude::Holder;
///
/// let mut holder = Holder::new();
/// holder.set(1);
/// assert_eq!(holder.get(), Some(&1));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holder<T> {
    data: Option<T>,
}

impl<T> Holder<T> {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self { data: None }
    }

    /// Store `value` in the slot, dropping whatever was there before.
    ///
    /// When `T` is a reference type the holder stores the reference
    /// itself, not a copy of the referent; the borrow checker requires
    /// the referent to outlive every use of the holder.
    /// # Example
    /// ```
    /// use holdall::prelude::Holder;
    /// let mut holder = Holder::new();
    /// holder.set("hello");
    /// assert_eq!(holder.get(), Some(&"hello"));
    /// ```
    pub fn set(&mut self, value: T) {
        self.data = Some(value);
    }

    /// Returns a reference to the stored value, or `None` while the slot
    /// is empty.
    pub fn get(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns a mutable reference to the stored value.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Store `value` and return the displaced value, if any.
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.data.replace(value)
    }

    /// Empty the slot, returning the value it held.
    pub fn take(&mut self) -> Option<T> {
        self.data.take()
    }

    /// Consume the holder, returning the stored value.
    pub fn into_inner(self) -> Option<T> {
        self.data
    }

    pub fn is_set(&self) -> bool {
        self.data.is_some()
    }
}

impl<T> Default for Holder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for Holder<T> {
    /// Create a holder already occupied by `value`.
    fn from(value: T) -> Self {
        Self { data: Some(value) }
    }
}
