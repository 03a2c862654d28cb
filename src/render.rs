use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Presentation rules: one CSS utility class list per content-node kind.
///
/// Resolved once as a constant; the renderer never rebuilds the mapping per
/// call. The classes mirror the site stylesheet.
struct NodeStyle {
    heading1: &'static str,
    heading2: &'static str,
    heading3: &'static str,
    paragraph: &'static str,
    unordered_list: &'static str,
    ordered_list: &'static str,
    list_item: &'static str,
    emphasis: &'static str,
    strong: &'static str,
    blockquote: &'static str,
    link: &'static str,
    code: &'static str,
    code_block: &'static str,
    image: &'static str,
    rule: &'static str,
    table: &'static str,
    table_header_cell: &'static str,
    table_cell: &'static str,
}

const STYLE: NodeStyle = NodeStyle {
    heading1: "text-4xl font-bold text-gray-900 mb-6",
    heading2: "text-3xl font-semibold text-gray-800 mb-4 mt-8",
    heading3: "text-2xl font-semibold text-gray-800 mb-3 mt-6",
    paragraph: "text-gray-700 leading-relaxed mb-4",
    unordered_list: "list-disc list-inside text-gray-700 mb-4 space-y-2",
    ordered_list: "list-decimal list-inside text-gray-700 mb-4 space-y-2",
    list_item: "leading-relaxed",
    emphasis: "italic",
    strong: "font-semibold text-gray-900",
    blockquote: "border-l-4 border-blue-500 pl-4 py-2 my-4 bg-blue-50 text-gray-700",
    link: "text-blue-600 hover:text-blue-700 underline",
    code: "bg-gray-100 rounded px-1 font-mono text-sm",
    code_block: "bg-gray-100 rounded p-4 mb-4 overflow-x-auto font-mono text-sm",
    image: "rounded-lg mb-4",
    rule: "my-8 border-gray-200",
    table: "min-w-full border-collapse mb-4",
    table_header_cell: "border-b border-gray-300 px-4 py-2 font-semibold text-gray-900",
    table_cell: "border-b border-gray-200 px-4 py-2 text-gray-700",
};

/// Render a recipe body to HTML.
///
/// The body is Markdown with the tables and strikethrough extensions
/// enabled. This is a pure function: no shared parser state, so concurrent
/// requests can render freely, and the same input always yields the same
/// output.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut writer = HtmlWriter::new(source.len());
    for event in Parser::new_ext(source, options) {
        writer.event(event);
    }
    writer.finish()
}

/// Streaming HTML emitter for one render call.
struct HtmlWriter {
    out: String,
    /// Column alignments of the table currently being emitted
    alignments: Vec<Alignment>,
    cell_index: usize,
    in_table_head: bool,
    /// Alt text of the image currently being collected
    image: Option<PendingImage>,
}

struct PendingImage {
    src: String,
    title: String,
    alt: String,
}

impl HtmlWriter {
    fn new(source_len: usize) -> Self {
        Self {
            out: String::with_capacity(source_len * 2),
            alignments: Vec::new(),
            cell_index: 0,
            in_table_head: false,
            image: None,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn event(&mut self, event: Event) {
        // While an image is open, inline events feed its alt text instead of
        // the output stream.
        if self.image.is_some() {
            match event {
                Event::Text(text) | Event::Code(text) => {
                    if let Some(image) = self.image.as_mut() {
                        image.alt.push_str(&text);
                    }
                }
                Event::End(TagEnd::Image) => self.close_image(),
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.out.push_str(&encode_text(&text)),
            Event::Code(code) => {
                self.open("code", STYLE.code);
                self.out.push_str(&encode_text(&code));
                self.out.push_str("</code>");
            }
            Event::Html(html) | Event::InlineHtml(html) => self.out.push_str(&html),
            Event::SoftBreak => self.out.push('\n'),
            Event::HardBreak => self.out.push_str("<br />\n"),
            Event::Rule => {
                self.out.push_str("<hr class=\"");
                self.out.push_str(STYLE.rule);
                self.out.push_str("\" />\n");
            }
            // Footnotes, task lists, and math are not enabled
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Paragraph => self.open("p", STYLE.paragraph),
            Tag::Heading { level, .. } => match level {
                HeadingLevel::H1 => self.open("h1", STYLE.heading1),
                HeadingLevel::H2 => self.open("h2", STYLE.heading2),
                HeadingLevel::H3 => self.open("h3", STYLE.heading3),
                HeadingLevel::H4 => self.open("h4", ""),
                HeadingLevel::H5 => self.open("h5", ""),
                HeadingLevel::H6 => self.open("h6", ""),
            },
            Tag::BlockQuote(_) => self.open("blockquote", STYLE.blockquote),
            Tag::CodeBlock(kind) => {
                self.open("pre", STYLE.code_block);
                match kind {
                    CodeBlockKind::Fenced(language) if !language.is_empty() => {
                        self.out.push_str("<code class=\"language-");
                        self.out
                            .push_str(&encode_double_quoted_attribute(&language));
                        self.out.push_str("\">");
                    }
                    _ => self.out.push_str("<code>"),
                }
            }
            Tag::List(Some(start)) => {
                if start == 1 {
                    self.open("ol", STYLE.ordered_list);
                } else {
                    self.out.push_str("<ol start=\"");
                    self.out.push_str(&start.to_string());
                    self.out.push_str("\" class=\"");
                    self.out.push_str(STYLE.ordered_list);
                    self.out.push_str("\">");
                }
                self.out.push('\n');
            }
            Tag::List(None) => {
                self.open("ul", STYLE.unordered_list);
                self.out.push('\n');
            }
            Tag::Item => self.open("li", STYLE.list_item),
            Tag::Emphasis => self.open("em", STYLE.emphasis),
            Tag::Strong => self.open("strong", STYLE.strong),
            Tag::Strikethrough => self.open("del", ""),
            Tag::Link {
                dest_url, title, ..
            } => {
                self.out.push_str("<a href=\"");
                self.out
                    .push_str(&encode_double_quoted_attribute(&dest_url));
                if !title.is_empty() {
                    self.out.push_str("\" title=\"");
                    self.out.push_str(&encode_double_quoted_attribute(&title));
                }
                self.out.push_str("\" class=\"");
                self.out.push_str(STYLE.link);
                self.out.push_str("\">");
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image = Some(PendingImage {
                    src: dest_url.to_string(),
                    title: title.to_string(),
                    alt: String::new(),
                });
            }
            Tag::Table(alignments) => {
                self.alignments = alignments;
                self.open("table", STYLE.table);
                self.out.push('\n');
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.cell_index = 0;
                self.out.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.cell_index = 0;
                self.out.push_str("<tr>");
            }
            Tag::TableCell => {
                let (element, class) = if self.in_table_head {
                    ("th", STYLE.table_header_cell)
                } else {
                    ("td", STYLE.table_cell)
                };
                let alignment = self
                    .alignments
                    .get(self.cell_index)
                    .copied()
                    .unwrap_or(Alignment::None);
                self.cell_index += 1;

                self.out.push('<');
                self.out.push_str(element);
                self.out.push_str(" class=\"");
                self.out.push_str(class);
                self.out.push(' ');
                self.out.push_str(alignment_class(alignment));
                self.out.push_str("\">");
            }
            // Footnote definitions and raw HTML blocks carry no wrapper of
            // their own; their contents stream through as plain events.
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.out.push_str("</p>\n"),
            TagEnd::Heading(level) => {
                self.out.push_str("</");
                self.out.push_str(heading_element(level));
                self.out.push_str(">\n");
            }
            TagEnd::BlockQuote(_) => self.out.push_str("</blockquote>\n"),
            TagEnd::CodeBlock => self.out.push_str("</code></pre>\n"),
            TagEnd::List(ordered) => {
                self.out
                    .push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
            }
            TagEnd::Item => self.out.push_str("</li>\n"),
            TagEnd::Emphasis => self.out.push_str("</em>"),
            TagEnd::Strong => self.out.push_str("</strong>"),
            TagEnd::Strikethrough => self.out.push_str("</del>"),
            TagEnd::Link => self.out.push_str("</a>"),
            TagEnd::Image => self.close_image(),
            TagEnd::Table => self.out.push_str("</tbody></table>\n"),
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.out.push_str("</tr></thead>\n<tbody>\n");
            }
            TagEnd::TableRow => self.out.push_str("</tr>\n"),
            TagEnd::TableCell => {
                self.out
                    .push_str(if self.in_table_head { "</th>" } else { "</td>" });
            }
            _ => {}
        }
    }

    fn open(&mut self, element: &str, class: &str) {
        self.out.push('<');
        self.out.push_str(element);
        if !class.is_empty() {
            self.out.push_str(" class=\"");
            self.out.push_str(class);
            self.out.push('"');
        }
        self.out.push('>');
    }

    fn close_image(&mut self) {
        let Some(image) = self.image.take() else {
            return;
        };
        self.out.push_str("<img src=\"");
        self.out
            .push_str(&encode_double_quoted_attribute(&image.src));
        self.out.push_str("\" alt=\"");
        self.out
            .push_str(&encode_double_quoted_attribute(&image.alt));
        if !image.title.is_empty() {
            self.out.push_str("\" title=\"");
            self.out
                .push_str(&encode_double_quoted_attribute(&image.title));
        }
        self.out.push_str("\" class=\"");
        self.out.push_str(STYLE.image);
        self.out.push_str("\" />");
    }
}

fn heading_element(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn alignment_class(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::None | Alignment::Left => "text-left",
        Alignment::Center => "text-center",
        Alignment::Right => "text-right",
    }
}
