use super::item::FixedItem;
use super::renderable::{fits, Fit, Renderable, Renderator};
use crate::geometry::XyOffset;
use crate::metrics::TextStyle;
use crate::units::Pt;

const TABSIZE: usize = 4;

/// A word and the whitespace in front of it, as byte ranges into the text
#[derive(Debug, Clone, Copy, PartialEq)]
struct Word {
    /// start of the whitespace preceding the word
    start: usize,
    /// start of the word itself
    word_start: usize,
    /// end of the word
    end: usize,
}

/// Whether a line may break at `ch`. No-break spaces hold their neighbours together.
fn is_break_space(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, '\u{a0}' | '\u{2007}' | '\u{202f}')
}

/// A run of text in a single style.
///
/// Text wraps between words, but never at a no-break space. Whitespace at the start of a
/// line is dropped, whitespace at the end of the text is kept only if it fits, and a word
/// too long for a line of its own is placed on a line by itself without being split.
#[derive(Debug, Clone)]
pub struct Text {
    style: TextStyle,
    text: String,
    words: Vec<Word>,
}

impl Text {
    pub fn new<S: AsRef<str>>(style: TextStyle, text: S) -> Text {
        // tabs become spaces, and newlines are just more whitespace
        let text = text
            .as_ref()
            .replace('\t', &" ".repeat(TABSIZE))
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ");
        let words = split_words(&text);
        Text { style, text, words }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The width of the whole text on one line
    pub fn width(&self) -> Pt {
        self.style.string_width(&self.text)
    }
}

fn split_words(text: &str) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();
    let mut start = 0usize;
    let mut word_start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        match (is_break_space(ch), word_start) {
            (false, None) => word_start = Some(i),
            (true, Some(ws)) => {
                words.push(Word {
                    start,
                    word_start: ws,
                    end: i,
                });
                start = i;
                word_start = None;
            }
            _ => {}
        }
    }

    if let Some(ws) = word_start {
        words.push(Word {
            start,
            word_start: ws,
            end: text.len(),
        });
    }

    words
}

impl Renderable for Text {
    fn renderator(&self) -> Box<dyn Renderator<'_> + '_> {
        Box::new(TextRenderator {
            text: self,
            next: 0,
        })
    }
}

struct TextRenderator<'a> {
    text: &'a Text,
    /// index of the next word to hand out
    next: usize,
}

/// A run of whole words taken from a [TextRenderator]
struct Extent {
    /// index one past the last word
    end: usize,
    width: Pt,
    /// whether the whitespace after the last word of the text comes along
    trailing: bool,
}

impl<'a> TextRenderator<'a> {
    /// How many words, starting at `next`, fit in `budget`. The first word is counted
    /// without its leading whitespace unless `keep_leading` is set, and is taken regardless
    /// of width if `force_first` is set.
    fn extent(&self, budget: Pt, keep_leading: bool, force_first: bool) -> Option<Extent> {
        let text = self.text;
        let mut end = self.next;
        let mut width = Pt(0.0);

        while let Some(word) = text.words.get(end) {
            let first = end == self.next;
            let from = if first && !keep_leading {
                word.word_start
            } else {
                word.start
            };
            let w = text.style.string_width(&text.text[from..word.end]);
            if !(first && force_first) && !fits(width + w, budget) {
                break;
            }
            width += w;
            end += 1;
        }

        if end == self.next {
            return None;
        }

        // whitespace ending the text hangs off the line unless there's room for it
        let mut trailing = false;
        if end == text.words.len() {
            let tail = text.style.string_width(&text.text[text.words[end - 1].end..]);
            if tail > Pt(0.0) && fits(width + tail, budget) {
                width += tail;
                trailing = true;
            }
        }

        Some(Extent {
            end,
            width,
            trailing,
        })
    }

    fn take(&mut self, extent: Extent, keep_leading: bool) -> FixedItem<'a> {
        let text: &'a Text = self.text;
        let from = if keep_leading {
            text.words[self.next].start
        } else {
            text.words[self.next].word_start
        };
        let to = if extent.trailing {
            text.text.len()
        } else {
            text.words[extent.end - 1].end
        };
        let fragment: &'a str = &text.text[from..to];
        self.next = extent.end;

        let style: &'a TextStyle = &text.style;
        FixedItem::new(extent.width, style.ascent(), style.descent(), move |target, top_left| {
            let baseline = XyOffset::new(top_left.x, top_left.y - style.ascent());
            target.draw_text(baseline, fragment, style)
        })
    }
}

impl<'a> Renderator<'a> for TextRenderator<'a> {
    fn has_more(&self) -> bool {
        self.next < self.text.words.len()
    }

    fn get_something(&mut self, max_width: Pt) -> FixedItem<'a> {
        let extent = self
            .extent(max_width, false, true)
            .expect("get_something called on an exhausted renderator");
        self.take(extent, false)
    }

    fn get_if_fits(&mut self, remaining_width: Pt) -> Fit<'a> {
        match self.extent(remaining_width, true, false) {
            Some(extent) => Fit::Fits(self.take(extent, true)),
            None => Fit::DoesNotFit,
        }
    }
}
