//! Browser Id Source
//!
//! `<prefix>-<millis>-<random>` ids from the JS clock and `Math.random`.

use tree_board_core::ids::timestamped_id;
use tree_board_core::IdGenerator;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserIds;

impl IdGenerator for BrowserIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let millis = js_sys::Date::now() as u64;
        let random = (js_sys::Math::random() * 1e15) as u64;
        timestamped_id(prefix, millis, random)
    }
}
