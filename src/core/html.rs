// src/core/html.rs
//
// Forgiving markup → text-node tokenizer.
//
// One pass over the document yields every visible text run in document order,
// each tagged with the ids of the elements enclosing it. No tree is built;
// callers that care about structure compare ancestor ids.
//
// Tolerances: unknown/unbalanced tags, unquoted or quoted attributes with '>'
// inside, comments, <script>/<style> bodies, stray '<' in text.

use super::sanitize::{decode_entities, normalize_ws};

/// A visible text run with its enclosing element ids (outermost first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub ancestors: Vec<usize>,
}

impl TextNode {
    /// Innermost enclosing element, if any.
    pub fn parent(&self) -> Option<usize> {
        self.ancestors.last().copied()
    }

    /// Element `levels` steps above this node (1 = parent).
    pub fn ancestor(&self, levels: usize) -> Option<usize> {
        let n = self.ancestors.len();
        if levels == 0 || levels > n { return None; }
        Some(self.ancestors[n - levels])
    }

    pub fn is_within(&self, element: usize) -> bool {
        self.ancestors.contains(&element)
    }
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Tokenize `markup` into its non-empty text nodes, in document order.
pub fn text_nodes(markup: &str) -> Vec<TextNode> {
    let mut t = Tokenizer::new(markup);
    t.run();
    t.out
}

struct Tokenizer<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    next_id: usize,
    open: Vec<(usize, String)>,
    pending: String,
    out: Vec<TextNode>,
}

impl<'a> Tokenizer<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            s,
            b: s.as_bytes(),
            i: 0,
            next_id: 0,
            open: Vec::new(),
            pending: String::new(),
            out: Vec::new(),
        }
    }

    fn run(&mut self) {
        while self.i < self.b.len() {
            let lt = match self.s[self.i..].find('<') {
                Some(rel) => self.i + rel,
                None => {
                    self.pending.push_str(&self.s[self.i..]);
                    break;
                }
            };
            self.pending.push_str(&self.s[self.i..lt]);
            self.i = lt;

            let rest = &self.s[lt..];
            if rest.starts_with("<!--") {
                self.flush();
                self.i = match rest.find("-->") {
                    Some(end) => lt + end + 3,
                    None => self.b.len(),
                };
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.flush();
                self.i = self.skip_tag(lt + 1).0;
            } else if rest.starts_with("</") {
                self.flush();
                self.close_tag(lt + 2);
            } else if self.b.get(lt + 1).is_some_and(|c| c.is_ascii_alphabetic()) {
                self.flush();
                self.open_tag(lt + 1);
            } else {
                // Stray '<' in text
                self.pending.push('<');
                self.i = lt + 1;
            }
        }
        self.flush();
    }

    fn flush(&mut self) {
        if self.pending.is_empty() { return; }
        let text = normalize_ws(&decode_entities(&self.pending));
        self.pending.clear();
        if text.is_empty() { return; }
        let ancestors = self.open.iter().map(|(id, _)| *id).collect();
        self.out.push(TextNode { text, ancestors });
    }

    /// Read a tag name starting at `from`; returns (lowercased name, end index).
    fn read_name(&self, from: usize) -> (String, usize) {
        let mut j = from;
        while j < self.b.len() {
            let c = self.b[j];
            if c.is_ascii_alphanumeric() || c == b'-' || c == b':' || c == b'_' { j += 1; } else { break; }
        }
        (self.s[from..j].to_ascii_lowercase(), j)
    }

    /// Skip to just past the closing '>'. A quote only opens a value right
    /// after '=' (whitespace allowed), so `alt=Joe's` stays unquoted.
    /// Returns (index after '>', whether the tag ended with "/>").
    fn skip_tag(&self, from: usize) -> (usize, bool) {
        let mut quote: Option<u8> = None;
        let mut after_eq = false;
        for j in from..self.b.len() {
            let c = self.b[j];
            match quote {
                Some(q) => {
                    if c == q { quote = None; }
                    continue;
                }
                None if after_eq && (c == b'"' || c == b'\'') => {
                    quote = Some(c);
                    continue;
                }
                None if c == b'>' => {
                    let self_closing = j > from && self.b[j - 1] == b'/';
                    return (j + 1, self_closing);
                }
                None => {}
            }
            if !c.is_ascii_whitespace() {
                after_eq = c == b'=';
            }
        }
        (self.b.len(), false)
    }

    fn open_tag(&mut self, name_start: usize) {
        let (name, name_end) = self.read_name(name_start);
        let (end, self_closing) = self.skip_tag(name_end);
        self.i = end;

        if RAW_TEXT_ELEMENTS.contains(&name.as_str()) && !self_closing {
            let close = join!("</", &name);
            self.i = match find_ci(&self.s[end..], &close) {
                Some(rel) => self.skip_tag(end + rel + close.len()).0,
                None => self.b.len(),
            };
            return;
        }
        if self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.open.push((id, name));
    }

    fn close_tag(&mut self, name_start: usize) {
        let (name, name_end) = self.read_name(name_start);
        self.i = self.skip_tag(name_end).0;
        // Pop back to the matching open tag; ignore closers with no opener
        if let Some(pos) = self.open.iter().rposition(|(_, n)| *n == name) {
            self.open.truncate(pos);
        }
    }
}

fn find_ci(hay: &str, needle: &str) -> Option<usize> {
    let (h, n) = (hay.as_bytes(), needle.as_bytes());
    if n.is_empty() { return Some(0); }
    h.windows(n.len()).position(|w| w.eq_ignore_ascii_case(n))
}
