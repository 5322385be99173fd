//! End-to-end behaviour of `AskOnce` against JSON file stores.

use std::fs;

use ask_once_core::{
    AnswerStore, Answers, AskError, AskOnce, AskOnceConfig, JsonFileStore, OnceOptions,
    QuestionCache, QuestionDefinition, QuestionSource, ScriptedPrompter,
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};

const STORE: &str = "ask-question-tests";

fn answers(value: Value) -> Answers {
    match value {
        Value::Object(map) => map,
        _ => Answers::new(),
    }
}

fn seed(dir: &TempDir, stored: Value) {
    let mut store = JsonFileStore::open(STORE, dir.path()).unwrap();
    store.set_all(&answers(stored)).unwrap();
}

fn engine(dir: &TempDir, prompter: &ScriptedPrompter) -> AskOnce {
    let questions = QuestionCache::new(prompter.clone())
        .with(QuestionDefinition::input("username", "What is your username?"))
        .with(QuestionDefinition::input("bar", "bar?"))
        .with(QuestionDefinition::input("name.first", "First name?"))
        .with(QuestionDefinition::input("name.last", "Last name?"));
    let config = AskOnceConfig::new(questions)
        .with_store_name(STORE)
        .with_data_dir(dir.path());
    AskOnce::new(config).unwrap()
}

#[tokio::test]
async fn override_on_empty_store() {
    let dir = tempdir().unwrap();
    let prompter = ScriptedPrompter::new();
    let mut ask = engine(&dir, &prompter);

    let answer = ask
        .once("username", OnceOptions::new().set("username", "alice"))
        .await
        .unwrap();

    assert_eq!(answer, json!("alice"));
    assert_eq!(prompter.prompt_count(), 0);
    assert!(ask.answers().data().is_empty());
    assert!(!dir.path().join(format!("{}.json", STORE)).exists());
}

#[tokio::test]
async fn stored_answer_is_reused() {
    let dir = tempdir().unwrap();
    seed(&dir, json!({"eee": "fff"}));
    let prompter = ScriptedPrompter::new();
    let mut ask = engine(&dir, &prompter);

    assert_eq!(ask.once("eee", OnceOptions::new()).await.unwrap(), json!("fff"));
    assert_eq!(
        ask.once("eee", OnceOptions::new().set("eee", "zzz")).await.unwrap(),
        json!("zzz")
    );
    assert_eq!(prompter.prompt_count(), 0);
}

#[tokio::test]
async fn init_with_data_clears_store() {
    let dir = tempdir().unwrap();
    seed(&dir, json!({"a": "b", "c": "d"}));
    let prompter = ScriptedPrompter::new();
    let mut ask = engine(&dir, &prompter);

    let options = OnceOptions::new().init().data(answers(json!({"aaa": "bbb"})));
    assert_eq!(ask.once("aaa", options).await.unwrap(), json!("bbb"));

    let reopened = JsonFileStore::open(STORE, dir.path()).unwrap();
    assert!(!reopened.has("a"));
    assert!(!reopened.has("c"));

    let previous = JsonFileStore::open(format!("{}.previous", STORE), dir.path()).unwrap();
    assert_eq!(previous.get("a"), Some(json!("b")));
    assert_eq!(previous.get("c"), Some(json!("d")));
}

#[tokio::test]
async fn handle_init_then_data_answer() {
    let dir = tempdir().unwrap();
    seed(&dir, json!({"a": "b", "c": "d"}));
    let prompter = ScriptedPrompter::new();
    let mut ask = engine(&dir, &prompter);

    ask.handle_init("a").unwrap();
    let options = OnceOptions::new().data(answers(json!({"k": "v"})));
    assert_eq!(ask.once("k", options).await.unwrap(), json!("v"));

    assert!(ask.answers().data().is_empty());
}

#[tokio::test]
async fn force_reasks_with_previous_default() {
    let dir = tempdir().unwrap();
    seed(&dir, json!({"bar": "baz", "username": "doowb"}));
    let prompter = ScriptedPrompter::new().answer("bar", "boop");
    let mut ask = engine(&dir, &prompter);

    let answer = ask.once("bar", OnceOptions::new().force()).await.unwrap();

    assert_eq!(answer, json!("boop"));
    assert_eq!(ask.questions().get("bar")[0].default, Some(json!("baz")));

    let reopened = JsonFileStore::open(STORE, dir.path()).unwrap();
    assert_eq!(reopened.get("bar"), Some(json!("boop")));
    assert_eq!(reopened.get("username"), Some(json!("doowb")));
}

#[tokio::test]
async fn handle_force_then_once_leaves_others() {
    let dir = tempdir().unwrap();
    seed(&dir, json!({"bar": "baz", "name": {"first": "Brian", "last": "Woodward"}}));
    let prompter = ScriptedPrompter::new().answer("name.first", "Jon");
    let mut ask = engine(&dir, &prompter);

    assert_eq!(ask.handle_force("name.first").unwrap(), Some(json!("Brian")));
    assert_eq!(ask.ask("name.first").await.unwrap(), json!("Jon"));

    let reopened = JsonFileStore::open(STORE, dir.path()).unwrap();
    assert_eq!(
        Value::Object(reopened.data().clone()),
        json!({"bar": "baz", "name": {"first": "Jon", "last": "Woodward"}})
    );
}

#[tokio::test]
async fn answers_survive_a_new_engine() {
    let dir = tempdir().unwrap();
    let prompter = ScriptedPrompter::new()
        .answer("name.first", "Brian")
        .answer("name.last", "Woodward");

    let mut ask = engine(&dir, &prompter);
    let name = ask.ask("name").await.unwrap();
    assert_eq!(name, json!({"first": "Brian", "last": "Woodward"}));
    drop(ask);

    let mut ask = engine(&dir, &prompter);
    assert_eq!(ask.ask("name.last").await.unwrap(), json!("Woodward"));
    assert_eq!(prompter.prompt_count(), 2);
}

#[tokio::test]
async fn failed_prompt_writes_nothing() {
    let dir = tempdir().unwrap();
    let prompter = ScriptedPrompter::failing("interrupted");
    let mut ask = engine(&dir, &prompter);

    let err = ask.ask("username").await.unwrap_err();

    assert!(err.is_prompt());
    assert!(!dir.path().join(format!("{}.json", STORE)).exists());
}

#[tokio::test]
async fn failed_persist_is_not_cached() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let prompter = ScriptedPrompter::new().answer("bar", "boop");
    let questions = QuestionCache::new(prompter.clone())
        .with(QuestionDefinition::input("bar", "bar?"));
    let config = AskOnceConfig::new(questions)
        .with_store_name(STORE)
        .with_data_dir(blocker.join("data"));
    let mut ask = AskOnce::new(config).unwrap();

    let err = ask.ask("bar").await.unwrap_err();
    assert!(matches!(err, AskError::Io(_)));
    assert!(!ask.answers().has("bar"));

    assert!(ask.ask("bar").await.is_err());
    assert_eq!(prompter.prompt_count(), 2);
}

#[test]
fn project_names_default_store() {
    let dir = tempdir().unwrap();
    let config = AskOnceConfig::new(QuestionCache::new(ScriptedPrompter::new()))
        .with_project("demo")
        .with_data_dir(dir.path());
    let ask = AskOnce::new(config).unwrap();

    assert_eq!(ask.config().store, "ask-once.demo");
    assert_eq!(ask.config().previous, "ask-once.demo.previous");
}
