// Code generated by "xtask help documentation"; DO NOT EDIT.

/*!
project auxiliary tasks

Usage:

    xtask [help] <command> [<args>...]

The commands are:

    build            builds the workspace
    help             displays help information about xtask
    test             runs the workspace tests

Use 'xtask help <command>' for more information about a command.

Additional help topics:

    workflow         describes the development workflow

Use 'xtask help <topic>' for more information about that topic.

Builds the workspace

Usage:

    xtask build [--release] [--features <list>] [<cargo args>...]

Build runs 'cargo build --workspace' from the project root.

Defaults come from the [build] section of xtask.toml; the flags below
override them. Arguments after the flags are passed to cargo unchanged.

Flags:

    --release
        build with the release profile
    --features <LIST>
        comma separated features to enable

Displays help information about xtask

Usage:

    xtask help [<command>|<topic>|documentation]

With no arguments, help prints the list of available commands and help
topics to the standard output.

Given the name of a command or topic, help prints its detailed help.

Given 'documentation', help writes the usage listing and the help of every
command into the documentation file, as a Rust inner doc comment.

Runs the workspace tests

Usage:

    xtask test [--package <name>] [<test filter>...]

Test runs 'cargo test' for the whole workspace, or for one package when
--package is given. Remaining arguments are passed to cargo as test filters.

Flags:

    -p, --package <NAME>
        only test this package

Describes the development workflow

A change usually goes through these steps:

    cargo xtask build
    cargo xtask test
    cargo xtask help documentation

The last step rewrites xtask/src/doc.rs; commit it together with any
change to a task's name, flags or help text.
*/
