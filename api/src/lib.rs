pub mod bindings;
pub mod consts;
pub mod error;
pub mod event;
pub mod instruction;
pub mod multiplier;
pub mod sdk;
pub mod state;
pub mod wager;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::event::*;
    pub use crate::instruction::*;
    pub use crate::multiplier::*;
    pub use crate::sdk::*;
    pub use crate::state::*;
    pub use crate::wager::*;
}

use steel::*;

declare_id!("5C1Szz63jbuQEHdn6tqcizy3U6sKvo1SXRq6KHZJAbrX");
