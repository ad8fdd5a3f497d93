pub mod common {
    pub use cookbook_common::*;
}

pub mod catalog {
    pub use cookbook_catalog::*;
}
