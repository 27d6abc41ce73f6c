//! README 文本格式化
//!
//! 纯函数：章节行、固定头部与可选段落的渲染

use super::chapter::Chapter;
use super::statistics::SourceStatistics;

/// README 固定头部（逐字写出，包括行尾空格）
pub const README_HEADER: &str = "# Zig Unleashed \n\
## A Comprehensive Guide to Robust and Optimal Programming \n\
\n\
In this repository, you will find code samples for each chapter of the book. \
The book mentions the name of each file, which corresponds to the respective file in this repository.\n\
\n\
### Chapters  \n\
\n";

/// 段落分隔线
pub const SECTION_RULE: &str = "---\n";

/// 软件环境要求段落
pub const SOFTWARE_REQUIREMENTS: &str = r#"## Software Requirements
It is recommended to use a `linux` operating system as we use `Makefile` extensively throughout this repository, however, you may use `Windows` (recommended to use `zig cc/c++` as the `C/C++` compiler respectively). 

Required: 
- `zig`: `v0.11.0`
- `rustc`: `> v1.63`
- `clang/gcc`: `v13.0.0/v11.4.0`
- `g++`: `v11.4.0`
- `make`: `v4.3`

For `ch09`'s cross-compilation you will need the following if you would like to target the Raspberry Pi 4: 

Dependencies:
```shell 
$ sudo apt install gcc-arm-linux-gnueabihf binutils-arm-linux-gnueabihf binutils-arm-linux-gnueabihf-dbg qemu-user
```

Rust target: `rustup target add armv7-unknown-linux-gnueabihf`
  
"#;

const STATISTICS_HEADING: &str = "\n\n# Statistics\n\n## Table\n\n";

/// 表头与对齐方式（数值列右对齐）
const STATISTICS_COLUMNS: [(&str, Align); 5] = [
    ("Language", Align::Left),
    ("Number of Files", Align::Right),
    ("Total Lines", Align::Right),
    ("Percentage of Total Files", Align::Left),
    ("Percentage of Total Lines", Align::Left),
];

/// 表头至少比标题宽两格
const HEADER_MIN_PADDING: usize = 2;

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// 格式化单个章节条目
///
/// `- [Chapter NN: Title](<repo>/tree/main/chNN)  \n`
pub fn format_chapter_line(chapter: &Chapter, repository_url: &str) -> String {
    let number = chapter.number();
    format!(
        "- [Chapter {}: {}]({}/tree/main/{})  \n",
        number.padded(),
        chapter.title(),
        repository_url.trim_end_matches('/'),
        number.dir_name()
    )
}

/// 软件要求段落（前后带分隔线）
pub fn render_software_requirements() -> String {
    format!("{SECTION_RULE}{SOFTWARE_REQUIREMENTS}{SECTION_RULE}")
}

fn percentage(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", part as f64 / total as f64 * 100.0)
}

/// 渲染统计段落（GitHub 表格）
pub fn render_statistics(stats: &SourceStatistics) -> String {
    let total_files = stats.total_files();
    let total_lines = stats.total_lines();

    let rows: Vec<[String; 5]> = stats
        .iter()
        .map(|(language, tally)| {
            [
                language.label().to_string(),
                tally.files.to_string(),
                tally.lines.to_string(),
                percentage(tally.files, total_files),
                percentage(tally.lines, total_lines),
            ]
        })
        .collect();

    let mut widths = STATISTICS_COLUMNS.map(|(title, _)| title.len() + HEADER_MIN_PADDING);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let render_row = |cells: [&str; 5]| -> String {
        let mut line = String::from("|");
        for ((cell, width), (_, align)) in cells.iter().zip(widths).zip(STATISTICS_COLUMNS) {
            match align {
                Align::Left => line.push_str(&format!(" {:<width$} |", cell)),
                Align::Right => line.push_str(&format!(" {:>width$} |", cell)),
            }
        }
        line
    };

    let mut lines = vec![render_row(STATISTICS_COLUMNS.map(|(title, _)| title))];
    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    lines.push(format!("|{}|", separator.join("|")));
    for row in &rows {
        lines.push(render_row(std::array::from_fn(|i| row[i].as_str())));
    }

    // 表格末尾不带换行
    let mut out = String::from(STATISTICS_HEADING);
    out.push_str(&lines.join("\n"));
    out
}
