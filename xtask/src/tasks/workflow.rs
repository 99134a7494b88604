use cmdhost::Topic;

const WORKFLOW: &str = "
A change usually goes through these steps:

    cargo xtask build
    cargo xtask test
    cargo xtask help documentation

The last step rewrites xtask/src/doc.rs; commit it together with any
change to a task's name, flags or help text.
";

pub fn topic() -> Topic {
    Topic::new("workflow", "describes the development workflow", WORKFLOW)
}
