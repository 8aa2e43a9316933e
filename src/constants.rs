// Centralized magic numbers & default values
pub const DEFAULT_BASE_DIR: &str = "src/main/java";
pub const DEFAULT_ALGO: &str = "mcts/parallel";
pub const DEFAULT_FOLDERS: &[&str] = &["board"];
pub const DEFAULT_FILES: &[&str] = &["manager/CodinGame.java", "algo/BaseAlgo.java"];
pub const DEFAULT_OUTPUT_PATH: &str = "target/codingame/Player.java";

/// Parent folder of every algorithm variant, relative to the base directory.
pub const ALGO_ROOT: &str = "algo";

pub const DEFAULT_PREPEND: &str =
    "import java.util.*;\nimport java.io.*;\nimport java.util.concurrent.*;\n\nclass Player {\n";
pub const DEFAULT_APPEND: &str = "    public static void main(String[] args) {\n        new CodinGame().run();\n    }\n}\n";

/// Leading lines starting with any of these are dropped before the first declaration.
pub const PREAMBLE_PREFIXES: &[&str] = &["package", "import", "/**", " *", " */"];
pub const STRIPPED_MODIFIERS: &[&str] = &["public", "private"];
pub const NESTED_PREFIX: &str = "static ";

/// CodinGame rejects submissions longer than this many characters.
pub const CODINGAME_CHAR_LIMIT: usize = 100_000;
