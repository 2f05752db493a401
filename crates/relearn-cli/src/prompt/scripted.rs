use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::Result;

use relearn_core::commands::create::CreateRequest;
use relearn_core::{Difficulty, ExerciseRecord, ExerciseType};

use super::{ConfirmResult, ExercisePrompt, MainMenuChoice};

/// あらかじめ決めた回答を返すプロンプト。
///
/// 呼ばれたプロンプト名を記録するので、どの入力が省略されたかを検証できる。
pub struct ScriptedPrompt {
    topic: Option<String>,
    slug: Option<String>,
    title: Option<String>,
    exercise_type: Option<ExerciseType>,
    difficulty: Option<Difficulty>,
    time: Option<String>,
    confirms: RefCell<VecDeque<ConfirmResult>>,
    exercise_index: Option<usize>,
    asked: RefCell<Vec<&'static str>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self {
            topic: Some("01-fundamentals".to_string()),
            slug: Some("props-demo".to_string()),
            title: Some("Props Demo".to_string()),
            exercise_type: Some(ExerciseType::CompleteMissing),
            difficulty: Some(Difficulty::Beginner),
            time: Some("15-20 minutes".to_string()),
            confirms: RefCell::new(VecDeque::new()),
            exercise_index: Some(0),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn with_slug(mut self, slug: Option<&str>) -> Self {
        self.slug = slug.map(ToString::to_string);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_confirms(self, confirms: &[ConfirmResult]) -> Self {
        self.confirms.borrow_mut().extend(confirms.iter().copied());
        self
    }

    pub fn with_exercise_index(mut self, index: Option<usize>) -> Self {
        self.exercise_index = index;
        self
    }

    pub fn asked(&self) -> Vec<&'static str> {
        self.asked.borrow().clone()
    }

    fn record(&self, name: &'static str) {
        self.asked.borrow_mut().push(name);
    }
}

impl ExercisePrompt for ScriptedPrompt {
    fn select_main_menu(&self) -> Result<Option<MainMenuChoice>> {
        self.record("menu");
        Ok(Some(MainMenuChoice::Exit))
    }

    fn select_topic(&self, _topics: &[String]) -> Result<Option<String>> {
        self.record("topic");
        Ok(self.topic.clone())
    }

    fn input_slug(&self) -> Result<Option<String>> {
        self.record("slug");
        Ok(self.slug.clone())
    }

    fn input_title(&self) -> Result<Option<String>> {
        self.record("title");
        Ok(self.title.clone())
    }

    fn select_type(&self) -> Result<Option<ExerciseType>> {
        self.record("type");
        Ok(self.exercise_type)
    }

    fn select_difficulty(&self) -> Result<Option<Difficulty>> {
        self.record("difficulty");
        Ok(self.difficulty)
    }

    fn input_time(&self, _default: &str) -> Result<Option<String>> {
        self.record("time");
        Ok(self.time.clone())
    }

    fn confirm(&self, _request: &CreateRequest) -> Result<ConfirmResult> {
        self.record("confirm");
        Ok(self
            .confirms
            .borrow_mut()
            .pop_front()
            .unwrap_or(ConfirmResult::Yes))
    }

    fn select_exercise(&self, _exercises: &[ExerciseRecord]) -> Result<Option<usize>> {
        self.record("exercise");
        Ok(self.exercise_index)
    }
}
