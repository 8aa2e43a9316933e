#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

pub const BOARD: &str = "package board;\n\nimport java.util.*;\n\npublic class Board {\n    int[] cells;\n}\n";
pub const MOVE: &str = "package board;\n\n/**\n * A single move.\n */\npublic record Move(int x, int y) {\n}\n";
pub const CODINGAME: &str =
    "package manager;\n\nimport board.*;\n\npublic class CodinGame {\n    void run() {}\n}\n";
pub const BASE_ALGO: &str = "package algo;\n\npublic abstract class BaseAlgo {\n}\n";
pub const PARALLEL_ALGO: &str =
    "package algo.mcts.parallel;\n\nimport algo.BaseAlgo;\n\npublic class ParallelMctsAlgo extends BaseAlgo {\n}\n";
pub const PARALLEL_NODE: &str = "package algo.mcts.parallel;\n\nclass ParallelMctsNode {\n}\n";

/// Builds the default project layout:
/// root/src/main/java/
///   board/Board.java, board/Move.java
///   board/util/Hidden.java          (nested, never bundled)
///   manager/CodinGame.java
///   manager/Parser.java             (not listed in `files`)
///   algo/BaseAlgo.java
///   algo/mcts/parallel/ParallelMctsAlgo.java, ParallelMctsNode.java
///   algo/random/RandomAlgo.java     (other variant)
pub fn codingame_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    let java = td.child("src/main/java");
    for dir in ["board/util", "manager", "algo/mcts/parallel", "algo/random"] {
        java.child(dir).create_dir_all().unwrap();
    }

    java.child("board/Board.java").write_str(BOARD).unwrap();
    java.child("board/Move.java").write_str(MOVE).unwrap();
    java.child("board/util/Hidden.java")
        .write_str("public class Hidden {}\n")
        .unwrap();
    java.child("manager/CodinGame.java").write_str(CODINGAME).unwrap();
    java.child("manager/Parser.java")
        .write_str("public class Parser {}\n")
        .unwrap();
    java.child("algo/BaseAlgo.java").write_str(BASE_ALGO).unwrap();
    java.child("algo/mcts/parallel/ParallelMctsAlgo.java")
        .write_str(PARALLEL_ALGO)
        .unwrap();
    java.child("algo/mcts/parallel/ParallelMctsNode.java")
        .write_str(PARALLEL_NODE)
        .unwrap();
    java.child("algo/random/RandomAlgo.java")
        .write_str("public class RandomAlgo extends BaseAlgo {}\n")
        .unwrap();
    td
}

/// One folder `f` with the two-file example, an empty algo dir `algo/v`.
pub fn two_file_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("src/f").create_dir_all().unwrap();
    td.child("src/algo/v").create_dir_all().unwrap();
    td.child("src/f/A.java")
        .write_str("package x;\n\npublic class A {}\n")
        .unwrap();
    td.child("src/f/B.java").write_str("class B {}\n").unwrap();
    td
}
