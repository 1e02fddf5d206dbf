use std::io::{self, Write};

/// A tag-stream interface for emitting XML.
///
/// Consumers drive the document structure through `open_tag` / `attribute` /
/// `close_tag` calls; how the markup is laid out (indentation, empty-element
/// collapsing) is left to the implementation. All methods report sink
/// failures as `io::Error`.
pub trait XmlWriter {
    /// Opens an element. The tag stays open for attributes until the next
    /// structural call.
    fn open_tag(&mut self, name: &str) -> io::Result<()>;

    /// Adds an attribute to the most recently opened element.
    ///
    /// Fails with `InvalidInput` if no element is open for attributes.
    fn attribute(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Closes the named element, which must be the innermost open one.
    fn close_tag(&mut self, name: &str) -> io::Result<()>;

    /// Writes a raw line verbatim (e.g. an XML declaration).
    fn print_raw(&mut self, raw: &str) -> io::Result<()>;
}

const INDENT: &str = "  ";

/// An [`XmlWriter`] that pretty-prints to an underlying sink.
///
/// Elements are indented two spaces per nesting level and elements closed
/// without children collapse to `<name .../>`. Attribute values are escaped;
/// tag names are written verbatim (callers control the fixed schema).
pub struct PrettyXmlWriter<W: Write> {
    sink: W,
    open_elements: Vec<String>,
    tag_pending: bool,
}

impl<W: Write> PrettyXmlWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            open_elements: Vec::new(),
            tag_pending: false,
        }
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn finish_pending_tag(&mut self) -> io::Result<()> {
        if self.tag_pending {
            writeln!(self.sink, ">")?;
            self.tag_pending = false;
        }
        Ok(())
    }

    fn write_indent(&mut self, depth: usize) -> io::Result<()> {
        for _ in 0..depth {
            self.sink.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl<W: Write> XmlWriter for PrettyXmlWriter<W> {
    fn open_tag(&mut self, name: &str) -> io::Result<()> {
        self.finish_pending_tag()?;
        self.write_indent(self.open_elements.len())?;
        write!(self.sink, "<{}", name)?;
        self.open_elements.push(name.to_string());
        self.tag_pending = true;
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> io::Result<()> {
        if !self.tag_pending {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("attribute '{}' written outside an open tag", name),
            ));
        }
        write!(self.sink, " {}=\"{}\"", name, escape_attribute(value))?;
        Ok(())
    }

    fn close_tag(&mut self, name: &str) -> io::Result<()> {
        let innermost = self.open_elements.pop().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("close of '{}' with no element open", name),
            )
        })?;
        if innermost != name {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("close of '{}' while '{}' is innermost", name, innermost),
            ));
        }
        if self.tag_pending {
            writeln!(self.sink, "/>")?;
            self.tag_pending = false;
        } else {
            self.write_indent(self.open_elements.len())?;
            writeln!(self.sink, "</{}>", name)?;
        }
        Ok(())
    }

    fn print_raw(&mut self, raw: &str) -> io::Result<()> {
        self.finish_pending_tag()?;
        writeln!(self.sink, "{}", raw)?;
        Ok(())
    }
}
