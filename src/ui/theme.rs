use crate::value::Kind;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color,   // Cyan for kind names
    pub reference: Color,   // Pink for indirect values
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for markers and booleans
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for selection
    function: Color::Rgb(249, 226, 175),       // Yellow for callables
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for kind names
    reference: Color::Rgb(245, 194, 231),      // Pink for references
};

impl Theme {
    /// Colour a value is drawn in, by kind
    pub fn kind_color(&self, kind: Kind) -> Color {
        match kind {
            Kind::Nul | Kind::NanMarker | Kind::Nil => self.comment,
            Kind::Bool => self.keyword,
            Kind::Int | Kind::Num | Kind::Instance => self.number,
            Kind::Callable => self.function,
            Kind::Opaque | Kind::Bytes | Kind::Sequence | Kind::Record => self.type_name,
            Kind::Indirect => self.reference,
        }
    }
}
