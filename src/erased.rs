use std::any::{type_name, Any, TypeId};

use anyhow::anyhow;

/// The stored value together with its type tag.
#[derive(Debug)]
struct Slot {
    tag: TypeId,
    name: &'static str,
    value: Box<dyn Any>,
}

/// A single-slot container that erases its element type.
///
/// Where [`Holder`](crate::prelude::Holder) is monomorphized per element
/// type, `ErasedHolder` keeps one boxed value tagged with its [`TypeId`].
/// A single holder value can hold different element types over its
/// lifetime, and type checking moves from the instantiation site to the
/// access site.
///
/// # Example
/// ```
/// use holdall::prelude::ErasedHolder;
///
/// let mut holder = ErasedHolder::new();
/// holder.set(1_i32);
/// assert_eq!(holder.get::<i32>(), Some(&1));
/// assert_eq!(holder.get::<&str>(), None);
///
/// holder.set("hello");
/// assert_eq!(holder.get::<&str>(), Some(&"hello"));
/// ```
#[derive(Debug, Default)]
pub struct ErasedHolder {
    slot: Option<Slot>,
}

impl ErasedHolder {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Box `value` and store it in the slot, dropping whatever was there
    /// before regardless of its type.
    pub fn set<T: Any>(&mut self, value: T) {
        self.slot = Some(Slot {
            tag: TypeId::of::<T>(),
            name: type_name::<T>(),
            value: Box::new(value),
        });
    }

    /// Returns a reference to the stored value, or `None` while the slot
    /// is empty or holds a value of a different type.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.slot.as_ref()?.value.downcast_ref()
    }

    /// Returns a mutable reference to the stored value.
    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.slot.as_mut()?.value.downcast_mut()
    }

    /// Empty the slot, returning the stored value as a `T`.
    ///
    /// Fails when the slot is empty or holds a value of a different type;
    /// on a type mismatch the stored value stays in place.
    pub fn take<T: Any>(&mut self) -> anyhow::Result<T> {
        match self.slot.take() {
            None => Err(anyhow!("no value has been set")),
            Some(Slot { tag, name, value }) => match value.downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(value) => {
                    self.slot = Some(Slot { tag, name, value });
                    Err(anyhow!(
                        "holder contains a value of type {}, not {}",
                        name,
                        type_name::<T>()
                    ))
                }
            },
        }
    }

    /// Returns true if the slot holds a value of type `T`.
    pub fn holds<T: Any>(&self) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|slot| slot.tag == TypeId::of::<T>())
    }

    pub fn is_set(&self) -> bool {
        self.slot.is_some()
    }
}
