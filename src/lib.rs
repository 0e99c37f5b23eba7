mod erased;
mod holder;

pub mod prelude {
    pub use crate::erased::*;
    pub use crate::holder::*;
}
