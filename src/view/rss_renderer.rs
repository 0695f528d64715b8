use std::borrow::Cow;
use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::post::Post;
use crate::text_utils::{format_rfc1123, join_url, summarize};

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Plain Text Blog</title>
    <link>https://example.com</link>
    <description>Posts from Plain Text Blog</description>
    <language>en-us</language>
    <lastBuildDate>Mon, 15 Jan 2024 00:00:00 +0000</lastBuildDate>
    <item>
      <title>HelloWorld</title>
      <link>https://example.com/HelloWorld.html</link>
      <guid>https://example.com/HelloWorld.html</guid>
      <pubDate>Mon, 15 Jan 2024 00:00:00 +0000</pubDate>
      <description>Hi there</description>
    </item>
  </channel>
</rss>
*/

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
    pub ch_language: &'a str,
}

impl<'a> RssChannel<'a> {
    /// `posts` must already be in store order; the first one dates the build.
    pub fn render(&self, posts: &[Post]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        // <?xml version="1.0" encoding="UTF-8"?>
        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        // <rss version="2.0">
        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;

        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;
        if !self.ch_language.is_empty() {
            push_text(&mut writer, "language", self.ch_language)?;
        }

        if let Some(latest) = posts.first() {
            push_text(&mut writer, "lastBuildDate", &format_rfc1123(&latest.timestamp))?;
        }

        for post in posts {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", &post.title)?;

            // link doubles as the permalink guid
            let link = join_url(self.ch_link, &post.output_file_name);
            push_text(&mut writer, "link", &link)?;
            push_text(&mut writer, "guid", &link)?;

            push_text(&mut writer, "pubDate", &format_rfc1123(&post.timestamp))?;
            push_text(&mut writer, "description", &summarize(&post.content))?;

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        let mut xml = writer.into_inner().into_inner();
        xml.push(b'\n');
        Ok(xml)
    }
}

/// Replaces characters outside the XML 1.0 `Char` production with U+FFFD.
fn xml_safe(text: &str) -> Cow<'_, str> {
    fn is_xml_char(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
    }

    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER }).collect())
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(&xml_safe(text))))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
