// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Localized diagnostic messages.
//!
//! Rendering is kept apart from the rules: checks emit [`Diagnostic`] values
//! and this module turns them into text for a given [`Lang`].

use crate::config::{Lang, LINE_LIMIT, TYPE_LIST};
use crate::rules::Diagnostic;

/// Render a diagnostic in the given language.
pub fn render(diagnostic: &Diagnostic, lang: Lang) -> String {
    match lang {
        Lang::En => render_en(diagnostic),
        Lang::ZhCn => render_zh_cn(diagnostic),
    }
}

fn render_en(diagnostic: &Diagnostic) -> String {
    let name = diagnostic.kind().name();
    match diagnostic {
        Diagnostic::Validated => format!("{name}: commit message meets the rule."),
        Diagnostic::Merge => format!("{name}: merge commit detected, skip check."),
        Diagnostic::ArgMissing => {
            format!("Error {name}: commit message file argument missing.")
        }
        Diagnostic::FileMissing { filepath } => {
            format!("Error {name}: file {filepath} does not exist.")
        }
        Diagnostic::EmptyMessage => {
            format!("Error {name}: commit message has no content except whitespaces.")
        }
        Diagnostic::EmptyHeader => {
            format!("Error {name}: header (first line) has no content except whitespaces.")
        }
        Diagnostic::BadHeaderFormat { header } => format!(
            "Error {name}: header (first line) not following the rule:\n{header}\n\
             if you can not find any error after check, maybe you use a full-width colon, \
             or lack of whitespace after the colon."
        ),
        Diagnostic::WrongType { commit_type } => format!(
            "Error {name}: {commit_type} is not one of the keywords:\n{}",
            TYPE_LIST.join(", ")
        ),
        Diagnostic::BodyMissing => {
            format!("Error {name}: body has no content except whitespaces.")
        }
        Diagnostic::NoBlankLineBeforeBody => {
            format!("Error {name}: no empty line between header and body.")
        }
        Diagnostic::LineOverlong {
            length,
            limit,
            line,
        } => format!("Error {name}: the length of line is {length}, exceed {limit}:\n{line}"),
    }
}

fn render_zh_cn(diagnostic: &Diagnostic) -> String {
    let name = diagnostic.kind().name();
    match diagnostic {
        Diagnostic::Validated => format!("{name}：commit message 符合规范。"),
        Diagnostic::Merge => format!("{name}：检测到 merge commit，跳过规范检查。"),
        Diagnostic::ArgMissing => format!("错误 {name}：缺少 commit message 文件参数。"),
        Diagnostic::FileMissing { filepath } => format!("错误 {name}：文件 {filepath} 不存在。"),
        Diagnostic::EmptyMessage => {
            format!("错误 {name}：commit message 没有内容或只有空白字符。")
        }
        Diagnostic::EmptyHeader => {
            format!("错误 {name}：header （首行） 没有内容或只有空白字符。")
        }
        Diagnostic::BadHeaderFormat { header } => format!(
            "错误 {name}：header （首行） 不符合规范：\n{header}\n\
             如果检查没有发现错误，请确认是否使用了中文冒号，以及冒号后面漏了空格。"
        ),
        Diagnostic::WrongType { commit_type } => format!(
            "错误 {name}：{commit_type} 不是以下关键字之一：\n{}",
            TYPE_LIST.join(", ")
        ),
        Diagnostic::BodyMissing => format!("错误 {name}：body 没有内容或只有空白字符。"),
        Diagnostic::NoBlankLineBeforeBody => {
            format!("错误 {name}：header 和 body 之间没有空一行。")
        }
        Diagnostic::LineOverlong {
            length,
            limit,
            line,
        } => format!("错误 {name}：单行内容长度为{length}，超过了{limit}个字符：\n{line}"),
    }
}

/// The rule reference printed after every format error.
pub fn rule_reference(lang: Lang) -> String {
    let types = TYPE_LIST.join(", ");
    match lang {
        Lang::En => format!(
            "
Commit message rule as follow:
<type>(<scope>): <subject>
// empty line
<body>
// empty line
<footer>

(<scope>), <body> and <footer> are optional
<type>  must be one of {types}
no line may exceed {LINE_LIMIT} characters"
        ),
        Lang::ZhCn => format!(
            "
Commit message 的格式要求如下：
<type>(<scope>): <subject>
// 空一行
<body>
// 空一行
<footer>

其中 (<scope>) <body> 和 <footer> 可选
<type> 必须是 {types} 中的一个
每行不能超过 {LINE_LIMIT} 个字符"
        ),
    }
}
