use crate::foundation::{core::Rgb8, error::AssetResult};

/// A quote and its attribution.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// `— {author}` attribution line.
    pub fn attribution(&self) -> String {
        format!("\u{2014} {}", self.author)
    }
}

/// Top and bottom colors of a background gradient, as `#rrggbb` strings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub top: String,
    pub bottom: String,
}

impl Palette {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            bottom: bottom.into(),
        }
    }

    pub fn colors(&self) -> AssetResult<(Rgb8, Rgb8)> {
        Ok((Rgb8::from_hex(&self.top)?, Rgb8::from_hex(&self.bottom)?))
    }
}

/// Every quote the app can show.
#[rustfmt::skip]
pub const APP_QUOTES: [(&str, &str); 30] = [
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Believe you can and you're halfway there.", "Theodore Roosevelt"),
    ("The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt"),
    ("It is during our darkest moments that we must focus to see the light.", "Aristotle"),
    ("The only impossible journey is the one you never begin.", "Tony Robbins"),
    ("Success is not final, failure is not fatal: it is the courage to continue that counts.", "Winston Churchill"),
    ("What lies behind us and what lies before us are tiny matters compared to what lies within us.", "Ralph Waldo Emerson"),
    ("The best time to plant a tree was 20 years ago. The second best time is now.", "Chinese Proverb"),
    ("Your time is limited, don't waste it living someone else's life.", "Steve Jobs"),
    ("The only person you are destined to become is the person you decide to be.", "Ralph Waldo Emerson"),
    ("Everything you've ever wanted is on the other side of fear.", "George Addair"),
    ("Hardships often prepare ordinary people for an extraordinary destiny.", "C.S. Lewis"),
    ("The mind is everything. What you think you become.", "Buddha"),
    ("Strive not to be a success, but rather to be of value.", "Albert Einstein"),
    ("The best revenge is massive success.", "Frank Sinatra"),
    ("I have not failed. I've just found 10,000 ways that won't work.", "Thomas Edison"),
    ("A person who never made a mistake never tried anything new.", "Albert Einstein"),
    ("The secret of getting ahead is getting started.", "Mark Twain"),
    ("Quality is not an act, it is a habit.", "Aristotle"),
    ("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    ("Don't watch the clock; do what it does. Keep going.", "Sam Levenson"),
    ("Whether you think you can or you think you can't, you're right.", "Henry Ford"),
    ("The only limit to our realization of tomorrow is our doubts of today.", "Franklin D. Roosevelt"),
    ("It does not matter how slowly you go as long as you do not stop.", "Confucius"),
    ("Act as if what you do makes a difference. It does.", "William James"),
    ("Success usually comes to those who are too busy to be looking for it.", "Henry David Thoreau"),
    ("Don't be afraid to give up the good to go for the great.", "John D. Rockefeller"),
    ("I find that the harder I work, the more luck I seem to have.", "Thomas Jefferson"),
    ("Success is walking from failure to failure with no loss of enthusiasm.", "Winston Churchill"),
    ("Try not to become a person of success, but rather try to become a person of value.", "Albert Einstein"),
];

/// Background gradients the app cycles through.
pub const APP_PALETTES: [(&str, &str); 10] = [
    ("#667eea", "#764ba2"),
    ("#f093fb", "#f5576c"),
    ("#4facfe", "#00f2fe"),
    ("#43e97b", "#38f9d7"),
    ("#fa709a", "#fee140"),
    ("#a8edea", "#fed6e3"),
    ("#ff9a9e", "#fecfef"),
    ("#ffecd2", "#fcb69f"),
    ("#a18cd1", "#fbc2eb"),
    ("#fad0c4", "#ffd1ff"),
];

/// Indices into [`APP_QUOTES`] shown on the store-listing screenshots, in order.
pub const SHOWCASE_QUOTES: [usize; 4] = [0, 1, 12, 28];

/// Number of leading [`APP_PALETTES`] used by the store listing.
pub const SHOWCASE_PALETTES: usize = 4;

pub fn app_quotes() -> Vec<Quote> {
    APP_QUOTES
        .iter()
        .map(|&(text, author)| Quote::new(text, author))
        .collect()
}

pub fn app_palettes() -> Vec<Palette> {
    APP_PALETTES
        .iter()
        .map(|&(top, bottom)| Palette::new(top, bottom))
        .collect()
}

pub fn showcase_quotes() -> Vec<Quote> {
    SHOWCASE_QUOTES
        .iter()
        .map(|&i| {
            let (text, author) = APP_QUOTES[i];
            Quote::new(text, author)
        })
        .collect()
}

pub fn showcase_palettes() -> Vec<Palette> {
    app_palettes().into_iter().take(SHOWCASE_PALETTES).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/generate/catalog.rs"]
mod tests;
