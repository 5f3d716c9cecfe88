//! 対話型メニュー
//!
//! メニューを表示し、オペレーターの選択に応じて監視パスを実行する。
//! 終了の判断は呼び出し元に返し、プロセスの終了は `main` が行う。

use crate::error::MonitorError;
use crate::runner::MonitorRunner;
use api_monitor_common::types::Environment;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::debug;

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 指定環境の監視を開始
    Monitor(Environment),
    /// 終了
    Quit,
}

impl MenuChoice {
    /// 入力トークンを選択肢に変換
    ///
    /// 整数以外、または 0/1/2 以外の整数は `InvalidMenuChoice` になる。
    pub fn parse(token: &str) -> Result<Self, MonitorError> {
        let value: i64 = token
            .trim()
            .parse()
            .map_err(|_| MonitorError::InvalidMenuChoice(token.to_string()))?;

        match value {
            0 => Ok(MenuChoice::Quit),
            1 => Ok(MenuChoice::Monitor(Environment::Sandbox)),
            2 => Ok(MenuChoice::Monitor(Environment::Production)),
            _ => Err(MonitorError::InvalidMenuChoice(token.to_string())),
        }
    }
}

/// 対話型シェル
pub struct Shell<R, W> {
    runner: MonitorRunner,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// 新しいシェルを作成
    pub fn new(runner: MonitorRunner, input: R, output: W) -> Self {
        Self {
            runner,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// メニューループを実行
    ///
    /// 終了が選ばれた場合（または入力が閉じられた場合）は `Ok(())` を返す。
    /// 不正な選択やURLリストの読み込み失敗はそのままエラーとして返す。
    pub async fn run(&mut self) -> Result<(), MonitorError> {
        self.welcome()?;

        loop {
            self.show_menu()?;

            let choice = match self.read_token()? {
                Some(token) => MenuChoice::parse(&token)?,
                None => {
                    debug!("Input closed, quitting");
                    MenuChoice::Quit
                }
            };

            match choice {
                MenuChoice::Monitor(environment) => {
                    self.runner.run_pass(environment, &mut self.output).await?;
                }
                MenuChoice::Quit => {
                    writeln!(self.output, "See you later, my friend")?;
                    self.output.flush()?;
                    return Ok(());
                }
            }
        }
    }

    fn welcome(&mut self) -> Result<(), MonitorError> {
        writeln!(
            self.output,
            "*** API MONITOR - VERSION {} ***",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), MonitorError> {
        writeln!(self.output, "--- MENU ---")?;
        for (index, environment) in Environment::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{} - Start monitoring {} APIs",
                index + 1,
                environment.label()
            )?;
        }
        writeln!(self.output, "0 - Quit")?;
        writeln!(self.output)?;
        write!(self.output, "Choose one option, please: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// 次の入力トークンを読む
    ///
    /// 空行は読み飛ばす。1 行に複数トークンがある場合は次回以降の入力として保持する。
    fn read_token(&mut self) -> Result<Option<String>, MonitorError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// 出力先を取り出す
    pub fn into_output(self) -> W {
        self.output
    }
}
