use crate::directive::{transform_line, Directive};
use crate::resolver_set::ResolverSet;

/// Text of one converted rule file: a two-line provenance header, a blank
/// line, then one directive per line in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub content: String,
    pub directives: usize,
}

impl ConvertedFile {
    pub fn render<'a, I>(source_file_name: &str, resolvers: &ResolverSet, lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut content = Self::header(source_file_name, resolvers);
        let mut directives = 0;

        for directive in lines
            .into_iter()
            .filter_map(|line| transform_line(line, resolvers))
        {
            push_line(&mut content, &directive);
            directives += 1;
        }

        Self {
            content,
            directives,
        }
    }

    pub fn header(source_file_name: &str, resolvers: &ResolverSet) -> String {
        format!(
            "# DNS servers: {}\n# Source file: {}\n\n",
            resolvers.joined(),
            source_file_name
        )
    }
}

fn push_line(content: &mut String, directive: &Directive) {
    content.push_str(directive.as_str());
    content.push('\n');
}
