//! Well-known playground paths.

pub const HOME: &str = "/";
pub const POSTS: &str = "/posts";
pub const ABOUT: &str = "/about";
pub const FRAGMENT: &str = "/fragment";
pub const EVENT: &str = "/event";
pub const HOOKS: &str = "/hooks";
pub const USE_STATE: &str = "/hooks/useState";
pub const USE_EFFECT: &str = "/hooks/useEffect";
pub const SHOPPING_CART: &str = "/shopping-cart";
pub const RELAY_EXAMPLE: &str = "/relay-example";
