//! GraphQL API tests.
//!
//! Executes queries directly against the schema and inspects the JSON
//! response, including error `code` extensions.

use serde_json::{Value, json};
use todolist::Store;
use todolist::core::ids::IdPolicy;
use todolist::test_support::{list_id, store_with};
use todolist_server::schema::{TodoSchema, build_schema};
use todolist_server::state::{AppState, ChangeEvent};

fn schema_for(store: Store) -> (TodoSchema, AppState) {
    let state = AppState::new(store, false);
    (build_schema(state.clone()), state)
}

async fn run(schema: &TodoSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).expect("serialize response")
}

fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

fn item_names(list: &Value) -> Vec<&str> {
    list["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["name"].as_str().expect("item name"))
        .collect()
}

async fn add_list(schema: &TodoSchema, name: &str) -> i64 {
    let response = run(
        schema,
        &format!(r#"mutation {{ addTodoList(name: "{name}") {{ id name items {{ id }} }} }}"#),
    )
    .await;
    response["data"]["addTodoList"]["id"]
        .as_i64()
        .expect("new list id")
}

#[tokio::test]
async fn add_todo_list_then_todo_lists_contains_it_once() {
    let (schema, _) = schema_for(Store::default());
    let id = add_list(&schema, "Groceries").await;

    let response = run(&schema, "{ todoLists { id name items { id name } } }").await;
    let lists = response["data"]["todoLists"].as_array().expect("lists");
    let matching: Vec<&Value> = lists
        .iter()
        .filter(|list| list["name"] == "Groceries")
        .collect();

    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["id"], json!(id));
    assert_eq!(matching[0]["items"], json!([]));
}

#[tokio::test]
async fn duplicate_list_fails_and_leaves_store_unchanged() {
    let (schema, state) = schema_for(Store::default());
    add_list(&schema, "X").await;

    let response = run(&schema, r#"mutation { addTodoList(name: "X") { id } }"#).await;
    assert_eq!(error_code(&response), Some("LISTA_EXISTENTE"));
    assert_eq!(
        response["errors"][0]["message"],
        "Uma lista com esse nome já existe!"
    );
    assert_eq!(response["data"]["addTodoList"], Value::Null);
    assert_eq!(state.store.read().await.lists().len(), 1);
}

#[tokio::test]
async fn delete_unknown_list_returns_true_and_changes_nothing() {
    let (schema, state) = schema_for(store_with(&[("Groceries", &["Apple"])]));
    let before = state.store.read().await.lists().to_vec();

    let response = run(&schema, "mutation { deleteTodoList(id: 424242) }").await;
    assert_eq!(response["data"]["deleteTodoList"], json!(true));
    assert_eq!(state.store.read().await.lists(), before.as_slice());
}

#[tokio::test]
async fn delete_selected_list_leaves_selection_on_placeholder() {
    let store = store_with(&[("A", &["Apple"]), ("B", &[])]);
    let a = list_id(&store, "A");
    let b = list_id(&store, "B");
    let (schema, state) = schema_for(store);
    let mut rx = state.event_tx.subscribe();

    run(&schema, &format!("{{ todoList(id: {a}) {{ id }} }}")).await;
    let deleted = run(&schema, &format!("mutation {{ deleteTodoList(id: {a}) }}")).await;
    assert_eq!(deleted["data"]["deleteTodoList"], json!(true));
    assert_eq!(rx.try_recv().expect("list event"), ChangeEvent::ListsChanged);

    let lists = run(&schema, "{ todoLists { id name } }").await;
    assert_eq!(lists["data"]["todoLists"], json!([{ "id": b, "name": "B" }]));

    let added = run(&schema, r#"mutation { addItem(values: { name: "y" }) }"#).await;
    assert_eq!(added["data"]["addItem"], json!(true));
    assert!(rx.try_recv().is_err());
    {
        let store = state.store.read().await;
        assert_eq!(store.list(b).map(|list| list.items.len()), Some(0));
        assert!(store.check_invariants().is_empty());
    }

    let response = run(
        &schema,
        &format!("{{ todoList(id: {a}) {{ id name items {{ id }} }} }}"),
    )
    .await;
    assert_eq!(
        response["data"]["todoList"],
        json!({ "id": null, "name": null, "items": [] })
    );
}

#[tokio::test]
async fn add_item_to_selected_list_appears_once() {
    let (schema, _) = schema_for(Store::default());
    let id = add_list(&schema, "Groceries").await;

    run(&schema, &format!("{{ todoList(id: {id}) {{ id }} }}")).await;
    let added = run(&schema, r#"mutation { addItem(values: { name: "A" }) }"#).await;
    assert_eq!(added["data"]["addItem"], json!(true));

    let response = run(&schema, &format!("{{ todoList(id: {id}) {{ items {{ name }} }} }}")).await;
    assert_eq!(item_names(&response["data"]["todoList"]), vec!["A"]);
}

#[tokio::test]
async fn add_item_twice_fails_with_duplicate_item() {
    let store = store_with(&[("Groceries", &[])]);
    let groceries = list_id(&store, "Groceries");
    let (schema, _) = schema_for(store);

    run(&schema, &format!("{{ todoList(id: {groceries}) {{ id }} }}")).await;
    run(&schema, r#"mutation { addItem(values: { name: "A" }) }"#).await;
    let second = run(&schema, r#"mutation { addItem(values: { name: "A" }) }"#).await;

    assert_eq!(error_code(&second), Some("ITEM_EXISTENTE"));
    assert_eq!(second["errors"][0]["extensions"]["kind"], "validation");

    let response = run(
        &schema,
        &format!("{{ todoList(id: {groceries}) {{ items {{ name }} }} }}"),
    )
    .await;
    assert_eq!(item_names(&response["data"]["todoList"]), vec!["A"]);
}

#[tokio::test]
async fn filter_keeps_matching_items_in_order() {
    let store = store_with(&[("Fruit", &["Apple", "Banana", "Grape"])]);
    let fruit = list_id(&store, "Fruit");
    let (schema, state) = schema_for(store);

    let response = run(
        &schema,
        &format!(r#"{{ todoList(id: {fruit}, filter: {{ name: "ap" }}) {{ name items {{ name }} }} }}"#),
    )
    .await;
    assert_eq!(response["data"]["todoList"]["name"], "Fruit");
    assert_eq!(
        item_names(&response["data"]["todoList"]),
        vec!["Apple", "Grape"]
    );

    let store = state.store.read().await;
    assert_eq!(store.list(fruit).map(|list| list.items.len()), Some(3));
}

#[tokio::test]
async fn unknown_list_returns_empty_placeholder() {
    let (schema, _) = schema_for(store_with(&[("Groceries", &["Apple"])]));

    let response = run(&schema, "{ todoList(id: 9999) { id name items { id } } }").await;
    assert_eq!(
        response["data"]["todoList"],
        json!({ "id": null, "name": null, "items": [] })
    );
}

#[tokio::test]
async fn item_mutation_without_list_id_follows_latest_selection() {
    let store = store_with(&[("A", &[]), ("B", &[])]);
    let a = list_id(&store, "A");
    let b = list_id(&store, "B");
    let (schema, state) = schema_for(store);

    run(&schema, &format!("{{ todoList(id: {a}) {{ id }} }}")).await;
    run(&schema, &format!("{{ todoList(id: {b}) {{ id }} }}")).await;
    run(&schema, r#"mutation { addItem(values: { name: "Milk" }) }"#).await;

    let store = state.store.read().await;
    assert_eq!(store.list(a).map(|list| list.items.len()), Some(0));
    assert_eq!(store.list(b).map(|list| list.items.len()), Some(1));
}

#[tokio::test]
async fn explicit_list_id_wins_over_selection() {
    let store = store_with(&[("A", &[]), ("B", &[])]);
    let a = list_id(&store, "A");
    let b = list_id(&store, "B");
    let (schema, state) = schema_for(store);

    run(&schema, &format!("{{ todoList(id: {b}) {{ id }} }}")).await;
    let response = run(
        &schema,
        &format!(r#"mutation {{ addItem(values: {{ name: "Milk" }}, listId: {a}) }}"#),
    )
    .await;
    assert_eq!(response["data"]["addItem"], json!(true));

    let store = state.store.read().await;
    assert_eq!(store.list(a).map(|list| list.items.len()), Some(1));
    assert_eq!(store.list(b).map(|list| list.items.len()), Some(0));
}

#[tokio::test]
async fn required_list_id_rejects_selection_fallback() {
    let store = store_with(&[("A", &[])]);
    let a = list_id(&store, "A");
    let state = AppState::new(store, true);
    let schema = build_schema(state.clone());

    run(&schema, &format!("{{ todoList(id: {a}) {{ id }} }}")).await;
    let response = run(&schema, r#"mutation { addItem(values: { name: "Milk" }) }"#).await;

    assert_eq!(error_code(&response), Some("ERRO_ADICIONAR_ITEM"));
    assert_eq!(response["errors"][0]["extensions"]["kind"], "internal");
    assert_eq!(state.store.read().await.list(a).map(|l| l.items.len()), Some(0));
}

#[tokio::test]
async fn update_item_renames_and_rejects_collisions() {
    let store = store_with(&[("Groceries", &["Apple", "Pear"])]);
    let groceries = list_id(&store, "Groceries");
    let apple = store.list(groceries).expect("list").items[0].id;
    let (schema, state) = schema_for(store);

    let collision = run(
        &schema,
        &format!(
            r#"mutation {{ updateItem(values: {{ id: {apple}, name: "PEAR" }}, listId: {groceries}) }}"#
        ),
    )
    .await;
    assert_eq!(error_code(&collision), Some("ITEM_EXISTENTE"));

    let case_only = run(
        &schema,
        &format!(
            r#"mutation {{ updateItem(values: {{ id: {apple}, name: "apple" }}, listId: {groceries}) }}"#
        ),
    )
    .await;
    assert_eq!(case_only["data"]["updateItem"], json!(true));

    let unknown = run(
        &schema,
        &format!(
            r#"mutation {{ updateItem(values: {{ id: -5, name: "Kiwi" }}, listId: {groceries}) }}"#
        ),
    )
    .await;
    assert_eq!(unknown["data"]["updateItem"], json!(true));

    let store = state.store.read().await;
    let names: Vec<&str> = store
        .list(groceries)
        .expect("list")
        .items
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["apple", "Pear"]);
}

#[tokio::test]
async fn delete_item_is_idempotent() {
    let store = store_with(&[("Groceries", &["Apple", "Pear"])]);
    let groceries = list_id(&store, "Groceries");
    let apple = store.list(groceries).expect("list").items[0].id;
    let (schema, state) = schema_for(store);

    run(&schema, &format!("{{ todoList(id: {groceries}) {{ id }} }}")).await;
    let first = run(&schema, &format!("mutation {{ deleteItem(id: {apple}) }}")).await;
    let second = run(&schema, &format!("mutation {{ deleteItem(id: {apple}) }}")).await;

    assert_eq!(first["data"]["deleteItem"], json!(true));
    assert_eq!(second["data"]["deleteItem"], json!(true));
    assert_eq!(
        state.store.read().await.list(groceries).map(|l| l.items.len()),
        Some(1)
    );
}

#[tokio::test]
async fn update_todo_list_returns_renamed_list_or_null() {
    let store = store_with(&[("Groceries", &["Apple"]), ("Work", &[])]);
    let groceries = list_id(&store, "Groceries");
    let (schema, _) = schema_for(store);

    let renamed = run(
        &schema,
        &format!(r#"mutation {{ updateTodoList(id: {groceries}, name: "Food") {{ id name items {{ name }} }} }}"#),
    )
    .await;
    assert_eq!(renamed["data"]["updateTodoList"]["name"], "Food");
    assert_eq!(item_names(&renamed["data"]["updateTodoList"]), vec!["Apple"]);

    let collision = run(
        &schema,
        &format!(r#"mutation {{ updateTodoList(id: {groceries}, name: "work") {{ id }} }}"#),
    )
    .await;
    assert_eq!(error_code(&collision), Some("LISTA_EXISTENTE"));

    let unknown = run(
        &schema,
        r#"mutation { updateTodoList(id: 31337, name: "Nope") { id } }"#,
    )
    .await;
    assert_eq!(unknown["data"]["updateTodoList"], Value::Null);
    assert!(unknown.get("errors").is_none());
}

#[tokio::test]
async fn add_item_without_name_is_an_internal_error() {
    let store = store_with(&[("Groceries", &[])]);
    let groceries = list_id(&store, "Groceries");
    let (schema, _) = schema_for(store);

    let response = run(
        &schema,
        &format!("mutation {{ addItem(values: {{ id: 1 }}, listId: {groceries}) }}"),
    )
    .await;
    assert_eq!(error_code(&response), Some("ERRO_ADICIONAR_ITEM"));
    assert_eq!(
        response["errors"][0]["message"],
        "Erro ao adicionar item na lista!"
    );
}

#[tokio::test]
async fn mutations_broadcast_change_events() {
    let (schema, state) = schema_for(Store::default());
    let mut rx = state.event_tx.subscribe();

    let id = add_list(&schema, "Groceries").await;
    run(
        &schema,
        &format!(r#"mutation {{ addItem(values: {{ name: "Apple" }}, listId: {id}) }}"#),
    )
    .await;
    run(&schema, "mutation { deleteTodoList(id: 777777) }").await;

    assert_eq!(rx.try_recv().expect("list event"), ChangeEvent::ListsChanged);
    assert_eq!(
        rx.try_recv().expect("item event"),
        ChangeEvent::ItemsChanged {
            list_id: i32::try_from(id).expect("i32 id")
        }
    );
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn random_id_policy_serves_small_ids() {
    let (schema, _) = schema_for(Store::new(IdPolicy::Random));
    for n in 0..10 {
        let id = add_list(&schema, &format!("List {n}")).await;
        assert!((0..999).contains(&id));
    }
}

#[test]
fn schema_exposes_published_operations() {
    let (schema, _) = schema_for(Store::default());
    let sdl = schema.sdl();

    for expected in [
        "type Item",
        "type TodoList",
        "input ItemInput",
        "input ItemFilter",
        "todoLists: [TodoList]",
        "deleteTodoList(id: Int!): Boolean",
    ] {
        assert!(sdl.contains(expected), "SDL missing {expected}:\n{sdl}");
    }
}

#[test]
fn build_app_accepts_missing_ui_dir() {
    let (schema, state) = schema_for(Store::default());
    let _app = todolist_server::build_app(
        state,
        schema,
        Some(std::path::Path::new("/nonexistent/ui/dist")),
    );
}
