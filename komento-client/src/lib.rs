mod forest;
pub use forest::{Forest, Preorder};

pub mod api {
    pub use komento_api::*;
}
