mod button;
mod focus_selector;
mod menu;
mod shapes;
mod slider;
mod text;
mod window;

pub use button::{Button, CallMode};
pub use focus_selector::FocusSelector;
pub use menu::{Menu, MenuCategory, MenuElement};
pub use shapes::{Dot, DotShape, Line, RectStyle, Rectangle};
pub use slider::Slider;
pub use text::Text;
pub use window::{WidgetId, Window};
