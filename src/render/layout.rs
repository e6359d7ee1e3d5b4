//! Backend independent page layout.
//!
//! Coordinates are millimetres measured from the top-left corner of the page.
//! Text widths are estimated from average Helvetica glyph widths, which is close
//! enough for wrapping and alignment of the built-in PDF fonts.

pub const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Distance from the bottom edge below which no body line may end.
    pub break_margin: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 10.0,
            break_margin: 15.0,
        }
    }
}

impl PageSetup {
    fn cell_padding(&self) -> f32 {
        self.margin / 10.0
    }

    fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin - 2.0 * self.cell_padding()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    pub size: f32,
    pub style: FontStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub runs: Vec<TextRun>,
}

impl Page {
    pub fn text(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|r| r.text.as_str())
    }
}

/// Replaces every character outside Latin-1 with `?`.
pub fn to_latin1_lossy(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

fn glyph_em(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' | 'I' => 0.25,
        ' ' | 'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' => 0.33,
        'm' | 'w' | 'M' | 'W' => 0.85,
        'A'..='Z' => 0.68,
        '0'..='9' => 0.56,
        _ => 0.52,
    }
}

pub fn text_width(text: &str, size: f32, style: FontStyle) -> f32 {
    let em: f32 = text.chars().map(glyph_em).sum();
    let weight = if style == FontStyle::Bold { 1.06 } else { 1.0 };
    em * weight * size * PT_TO_MM
}

/// Greedy word wrap; words wider than a whole line are split by character.
pub fn wrap(text: &str, max_width: f32, size: f32, style: FontStyle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width(&candidate, size, style) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, size, style) <= max_width {
            current = word.to_string();
        } else {
            for c in word.chars() {
                current.push(c);
                if text_width(&current, size, style) > max_width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Writes lines top to bottom, starting new pages as needed. Every page gets
/// the running header when it is opened and a page number footer on
/// [`PageWriter::finish`].
pub struct PageWriter {
    setup: PageSetup,
    header: String,
    pages: Vec<Page>,
    y: f32,
    body_top: f32,
    style: FontStyle,
    size: f32,
}

impl PageWriter {
    pub const HEADER_SIZE: f32 = 10.0;
    pub const HEADER_HEIGHT: f32 = 10.0;
    pub const FOOTER_SIZE: f32 = 8.0;

    pub fn new(setup: PageSetup, header: impl Into<String>) -> Self {
        let mut writer = Self {
            setup,
            header: to_latin1_lossy(&header.into()),
            pages: Vec::new(),
            y: setup.margin,
            body_top: setup.margin + Self::HEADER_HEIGHT,
            style: FontStyle::Regular,
            size: 11.0,
        };
        writer.add_page();
        writer
    }

    pub fn set_font(&mut self, style: FontStyle, size: f32) {
        self.style = style;
        self.size = size;
    }

    /// One line of text, then a line break of `height`.
    pub fn cell(&mut self, height: f32, text: &str, align: Align) {
        self.break_if_needed(height);
        let text = to_latin1_lossy(text);
        self.push_run(text, height, align);
        self.y += height;
    }

    /// Wrapped paragraph, each line `height` tall.
    pub fn multi_cell(&mut self, height: f32, text: &str, align: Align) {
        let text = to_latin1_lossy(text);
        for line in wrap(&text, self.setup.content_width(), self.size, self.style) {
            self.break_if_needed(height);
            self.push_run(line, height, align);
            self.y += height;
        }
    }

    pub fn ln(&mut self, height: f32) {
        self.y += height;
    }

    pub fn finish(mut self) -> Vec<Page> {
        let baseline = self.setup.height - self.setup.break_margin + 5.0 + 0.35 * Self::FOOTER_SIZE * PT_TO_MM;
        let total = self.pages.len();
        for number in 1..=total {
            let label = format!("Page {}", number);
            let x = self.aligned_x(&label, Self::FOOTER_SIZE, FontStyle::Italic, Align::Center);
            self.pages[number - 1].runs.push(TextRun {
                text: label,
                x,
                baseline,
                size: Self::FOOTER_SIZE,
                style: FontStyle::Italic,
            });
        }
        self.pages
    }

    fn add_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.setup.margin;

        let (style, size) = (self.style, self.size);
        self.set_font(FontStyle::Bold, Self::HEADER_SIZE);
        let header = self.header.clone();
        self.push_run(header, Self::HEADER_HEIGHT, Align::Right);
        self.y += Self::HEADER_HEIGHT;
        self.set_font(style, size);
    }

    fn break_if_needed(&mut self, height: f32) {
        let limit = self.setup.height - self.setup.break_margin;
        if self.y + height > limit && self.y > self.body_top {
            self.add_page();
        }
    }

    fn push_run(&mut self, text: String, height: f32, align: Align) {
        let x = self.aligned_x(&text, self.size, self.style, align);
        let baseline = self.y + height / 2.0 + 0.35 * self.size * PT_TO_MM;
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(TextRun {
                text,
                x,
                baseline,
                size: self.size,
                style: self.style,
            });
        }
    }

    fn aligned_x(&self, text: &str, size: f32, style: FontStyle, align: Align) -> f32 {
        let left = self.setup.margin + self.setup.cell_padding();
        let free = (self.setup.content_width() - text_width(text, size, style)).max(0.0);
        match align {
            Align::Left => left,
            Align::Center => left + free / 2.0,
            Align::Right => left + free,
        }
    }
}
