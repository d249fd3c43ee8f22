use crate::naming::to_platform_line_endings;

/// Provenance header written at the top of every generated file.
///
/// `{generator}` is replaced with the name of the producing generator.
pub const AUTO_GENERATED_HEADER: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by {generator}.
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------
";

/// Render the provenance header for a generator.
pub fn provenance_header(generator_name: &str) -> String {
    AUTO_GENERATED_HEADER.replace("{generator}", generator_name)
}

/// A named unit of generated text, destined for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    name: String,
    generator_name: String,
    content: String,
}

impl GeneratedArtifact {
    /// Create a new artifact.
    ///
    /// `name` becomes the file stem; `generator_name` is shown in the header.
    pub fn new(
        name: impl Into<String>,
        generator_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            generator_name: generator_name.into(),
            content: content.into(),
        }
    }

    /// Get the artifact name (file stem)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the name of the generator that produced this artifact
    pub fn generator_name(&self) -> &str {
        &self.generator_name
    }

    /// Get the body text, without header
    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name for this artifact with the given extension (without dot).
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }

    /// Full file contents: provenance header followed by the body, using the
    /// host platform's line endings.
    pub fn render(&self) -> String {
        let mut text = provenance_header(&self.generator_name);
        text.push_str(&self.content);
        to_platform_line_endings(&text)
    }
}
