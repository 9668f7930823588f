#![allow(dead_code)]

pub mod command;
pub mod file;
pub mod runner;

/// Builds a `svn status --xml` document with one entry per `(path, item, revision)`.
pub fn status_xml(target: &str, entries: &[(&str, &str, Option<i64>)]) -> String {
    let body = entries
        .iter()
        .map(|(path, item, revision)| {
            let revision = revision
                .map(|revision| format!("\n   revision=\"{revision}\""))
                .unwrap_or_default();
            format!(
                "<entry\n   path=\"{path}\">\n<wc-status\n   props=\"none\"\n   item=\"{item}\"{revision}>\n</wc-status>\n</entry>\n"
            )
        })
        .collect::<String>();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<status>\n<target\n   path=\"{target}\">\n{body}</target>\n</status>\n"
    )
}
