/// An example preset the user can load into the form with `example <n>`.
pub struct ExamplePreset {
    pub label: &'static str,
    pub url: &'static str,
    pub query: &'static str,
}

pub const EXAMPLES: &[ExamplePreset] = &[
    ExamplePreset {
        label: "Basic page analysis",
        url: "https://example.com",
        query: "What is the title and main content of this page?",
    },
    ExamplePreset {
        label: "Project information",
        url: "https://github.com/microsoft/playwright",
        query: "What is this project about and what are its main features?",
    },
];
