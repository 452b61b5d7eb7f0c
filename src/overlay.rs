use crate::core::{FloatingLabel, TranscriptReveal, TranscriptTone};
use crate::dom;
use crate::frame::LabelSink;
use web_sys as web;

const LABEL_STYLE: &str = "position:absolute;left:50%;top:50%;pointer-events:none;white-space:nowrap;\
font:300 12px 'Cormorant Garamond',Georgia,serif;letter-spacing:0.2em;color:hsla(30, 15%, 45%, 0.6)";

/// Renders floating labels as absolutely positioned spans inside a container.
pub struct DomLabelSink {
    document: web::Document,
    container: web::HtmlElement,
    spans: Vec<web::HtmlElement>,
}

impl DomLabelSink {
    pub fn new(document: web::Document, container: web::HtmlElement) -> Self {
        Self {
            document,
            container,
            spans: Vec::new(),
        }
    }
}

impl LabelSink for DomLabelSink {
    fn render(&mut self, labels: &[FloatingLabel]) {
        while self.spans.len() < labels.len() {
            match dom::append_span(&self.document, &self.container) {
                Some(span) => self.spans.push(span),
                None => break,
            }
        }
        for (span, label) in self.spans.iter().zip(labels) {
            let pos = label.position();
            if span.text_content().as_deref() != Some(label.text) {
                span.set_text_content(Some(label.text));
            }
            let style = format!(
                "{LABEL_STYLE};transform:translate(-50%, -50%) translate({:.1}px, {:.1}px) scale({:.3});opacity:{:.3}",
                pos.x,
                pos.y,
                label.visible_scale(),
                label.visible_opacity()
            );
            _ = span.set_attribute("style", &style);
        }
        for span in self.spans.drain(labels.len().min(self.spans.len())..) {
            span.remove();
        }
    }

    fn clear(&mut self) {
        for span in self.spans.drain(..) {
            span.remove();
        }
    }
}

impl Drop for DomLabelSink {
    fn drop(&mut self) {
        self.clear();
    }
}

/// One span per transcript word; words fade in as they become visible.
pub struct TranscriptSpans {
    document: web::Document,
    container: web::HtmlElement,
    spans: Vec<web::HtmlElement>,
}

impl TranscriptSpans {
    pub fn new(document: web::Document, container: web::HtmlElement) -> Self {
        Self {
            document,
            container,
            spans: Vec::new(),
        }
    }

    /// Recreate the spans for the current words, all hidden.
    pub fn rebuild(&mut self, reveal: &TranscriptReveal) {
        self.container.set_inner_html("");
        self.spans.clear();
        for word in reveal.words() {
            let Some(span) = dom::append_span(&self.document, &self.container) else {
                break;
            };
            span.set_text_content(Some(word.as_str()));
            self.spans.push(span);
        }
        self.update(reveal);
    }

    /// Replace the words with one fixed block of text in `tone`.
    pub fn show_static(&mut self, text: &str, tone: TranscriptTone) {
        self.container.set_inner_html("");
        self.spans.clear();
        let Some(block) = dom::append_span(&self.document, &self.container) else {
            return;
        };
        block.set_text_content(Some(text));
        let style = format!(
            "display:block;text-align:center;font-size:clamp(1.5rem, 4vw, 1.875rem);line-height:1.6;color:{}",
            tone.color().to_css()
        );
        _ = block.set_attribute("style", &style);
    }

    pub fn update(&self, reveal: &TranscriptReveal) {
        for (i, span) in self.spans.iter().enumerate() {
            let shown = reveal.is_visible(i);
            let style = format!(
                "display:inline-block;margin:0 0.25rem;transition:all 500ms ease-out;transition-delay:{}ms;\
                 opacity:{};transform:translateY({});filter:blur({})",
                TranscriptReveal::word_delay_ms(i),
                if shown { 1 } else { 0 },
                if shown { "0" } else { "0.5rem" },
                if shown { "0" } else { "4px" },
            );
            _ = span.set_attribute("style", &style);
        }
    }
}
