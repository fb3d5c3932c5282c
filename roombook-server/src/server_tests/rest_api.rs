use crate::server_tests::start_test_server;
use crate::server_tests::test_client::TestClient;
use reqwest::StatusCode;
use reqwest::header::LOCATION;
use serde_json::{Value, json};

async fn create_room(client: &TestClient, name: &str, capacity: u32) -> reqwest::Response {
	client
		.post("/sala")
		.form(&[
			("nome", name),
			("capacidade", capacity.to_string().as_str()),
			("descricao", "Sala com projetor"),
		])
		.send()
		.await
		.expect("Request failed.")
}

async fn reserve(client: &TestClient, room_id: i64, date: &str, time: &str, duration_hours: u32) -> reqwest::Response {
	client
		.post("/reserva")
		.form(&[
			("sala_id", room_id.to_string().as_str()),
			("data_reserva", date),
			("horario_reserva", time),
			("duracao_reserva", duration_hours.to_string().as_str()),
		])
		.send()
		.await
		.expect("Request failed.")
}

async fn json_body(response: reqwest::Response) -> Value {
	response.json::<Value>().await.expect("Failed to parse JSON body")
}

#[tokio::test]
async fn should_create_room_and_return_its_view() {
	let client = start_test_server().await;

	let response = create_room(&client, "sala1", 12).await;

	assert_eq!(response.status(), StatusCode::OK);
	let body = json_body(response).await;
	assert_eq!(body["nome"], "sala1");
	assert_eq!(body["capacidade"], 12);
	assert_eq!(body["descricao"], "Sala com projetor");
	assert_eq!(body["total_reservas"], 0);
	assert_eq!(body["reservas"], json!([]));
	assert!(body["id"].is_i64());
}

#[tokio::test]
async fn should_reject_room_with_duplicate_name() {
	let client = start_test_server().await;
	create_room(&client, "sala1", 12).await;

	let response = create_room(&client, "sala1", 4).await;

	assert_eq!(response.status(), StatusCode::CONFLICT);
	assert_eq!(
		json_body(response).await,
		json!({"message": "Sala de mesmo nome já salva na base :/"})
	);
}

#[tokio::test]
async fn should_list_rooms() {
	let client = start_test_server().await;

	let empty = client.get("/salas").send().await.expect("Request failed.");
	assert_eq!(empty.status(), StatusCode::OK);
	assert_eq!(json_body(empty).await, json!({"salas": []}));

	create_room(&client, "sala1", 12).await;
	create_room(&client, "sala2", 4).await;
	let response = client.get("/salas").send().await.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		json_body(response).await,
		json!({"salas": [
			{"nome": "sala1", "capacidade": 12, "descricao": "Sala com projetor"},
			{"nome": "sala2", "capacidade": 4, "descricao": "Sala com projetor"},
		]})
	);
}

#[tokio::test]
async fn should_find_room_by_name() {
	let client = start_test_server().await;
	create_room(&client, "sala de reunião", 8).await;

	let response = client
		.get("/sala")
		.query(&[("nome", "sala de reunião")])
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(json_body(response).await["nome"], "sala de reunião");
}

#[tokio::test]
async fn should_decode_room_name_only_once() {
	let client = start_test_server().await;
	create_room(&client, "sala 100%25", 8).await;

	let literal = client
		.get("/sala")
		.query(&[("nome", "sala 100%25")])
		.send()
		.await
		.expect("Request failed.");
	let decoded_twice = client
		.get("/sala")
		.query(&[("nome", "sala 100%")])
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(literal.status(), StatusCode::OK);
	assert_eq!(decoded_twice.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_room() {
	let client = start_test_server().await;

	let response = client
		.get("/sala?nome=inexistente")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(json_body(response).await, json!({"message": "Sala não encontrada na base :/"}));
}

#[tokio::test]
async fn should_delete_room_and_its_reservations() {
	let client = start_test_server().await;
	let room = json_body(create_room(&client, "sala1", 12).await).await;
	let room_id = room["id"].as_i64().expect("Room id missing");
	reserve(&client, room_id, "12/07/2023", "10:00", 1).await;

	let response = client
		.delete("/sala?nome=sala1")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		json_body(response).await,
		json!({"message": "Sala removida", "nome": "sala1"})
	);

	let find = client.get("/sala?nome=sala1").send().await.expect("Request failed.");
	assert_eq!(find.status(), StatusCode::NOT_FOUND);
	let reservations = client.get("/reservas").send().await.expect("Request failed.");
	assert_eq!(json_body(reservations).await, json!({"reservas": []}));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_room() {
	let client = start_test_server().await;

	let response = client
		.delete("/sala?nome=inexistente")
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(json_body(response).await, json!({"message": "Sala não encontrada na base :/"}));
}

#[tokio::test]
async fn should_reject_overlapping_reservations_and_accept_adjacent_ones() {
	let client = start_test_server().await;
	let room = json_body(create_room(&client, "sala1", 12).await).await;
	let room_id = room["id"].as_i64().expect("Room id missing");

	let first = reserve(&client, room_id, "12/07/2023", "10:00", 1).await;
	assert_eq!(first.status(), StatusCode::OK);
	let first = json_body(first).await;
	assert_eq!(first["total_reservas"], 1);
	assert_eq!(first["reservas"][0]["inicio_reserva"], "2023-07-12T10:00:00");
	assert_eq!(first["reservas"][0]["fim_reserva"], "2023-07-12T11:00:00");

	let overlapping = reserve(&client, room_id, "12/07/2023", "10:30", 1).await;
	assert_eq!(overlapping.status(), StatusCode::CONFLICT);
	assert_eq!(
		json_body(overlapping).await,
		json!({"message": "Já existe uma reserva para essa sala no mesmo período."})
	);

	let adjacent = reserve(&client, room_id, "12/07/2023", "11:00", 1).await;
	assert_eq!(adjacent.status(), StatusCode::OK);
	assert_eq!(json_body(adjacent).await["total_reservas"], 2);
}

#[tokio::test]
async fn should_return_not_found_when_reserving_unknown_room() {
	let client = start_test_server().await;

	let response = reserve(&client, 42, "12/07/2023", "10:00", 1).await;

	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(json_body(response).await, json!({"message": "Sala não encontrada na base :/"}));
}

#[tokio::test]
async fn should_reject_reservation_with_invalid_input() {
	let client = start_test_server().await;
	let room = json_body(create_room(&client, "sala1", 12).await).await;
	let room_id = room["id"].as_i64().expect("Room id missing");

	let malformed_date = reserve(&client, room_id, "2023-07-12", "10:00", 1).await;
	let zero_duration = reserve(&client, room_id, "12/07/2023", "10:00", 0).await;

	let expected = json!({"message": "Data, horário ou duração da reserva inválidos :/"});
	assert_eq!(malformed_date.status(), StatusCode::BAD_REQUEST);
	assert_eq!(json_body(malformed_date).await, expected);
	assert_eq!(zero_duration.status(), StatusCode::BAD_REQUEST);
	assert_eq!(json_body(zero_duration).await, expected);
}

#[tokio::test]
async fn should_list_reservations_of_all_rooms() {
	let client = start_test_server().await;
	let first_room = json_body(create_room(&client, "sala1", 12).await).await["id"]
		.as_i64()
		.expect("Room id missing");
	let second_room = json_body(create_room(&client, "sala2", 4).await).await["id"]
		.as_i64()
		.expect("Room id missing");
	reserve(&client, first_room, "12/07/2023", "10:00", 2).await;
	reserve(&client, second_room, "12/07/2023", "10:00", 1).await;

	let response = client.get("/reservas").send().await.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		json_body(response).await,
		json!({"reservas": [
			{"sala_id": first_room, "inicio_reserva": "2023-07-12T10:00:00", "fim_reserva": "2023-07-12T12:00:00"},
			{"sala_id": second_room, "inicio_reserva": "2023-07-12T10:00:00", "fim_reserva": "2023-07-12T11:00:00"},
		]})
	);
}

#[tokio::test]
async fn should_redirect_root_to_openapi_json() {
	let client = start_test_server().await;

	let response = client.get("/").send().await.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(
		response.headers().get(LOCATION).and_then(|value| value.to_str().ok()),
		Some("/openapi.json")
	);
}

#[tokio::test]
async fn should_provide_openapi_json() {
	let client = start_test_server().await;

	let response = client.get("/openapi.json").send().await.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);
	let specification = json_body(response).await;
	assert!(
		specification["openapi"]
			.as_str()
			.is_some_and(|version| version.starts_with("3."))
	);
	for path in ["/sala", "/salas", "/reserva", "/reservas"] {
		assert!(specification["paths"].get(path).is_some(), "Missing path {path}");
	}
}

#[tokio::test]
async fn should_reject_reservation_ending_after_year_9999() {
	let client = start_test_server().await;
	let room = json_body(create_room(&client, "sala1", 12).await).await;
	let room_id = room["id"].as_i64().expect("Room id missing");

	let response = reserve(&client, room_id, "31/12/9999", "23:00", 2).await;

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(
		json_body(response).await,
		json!({"message": "Data, horário ou duração da reserva inválidos :/"})
	);
}

#[tokio::test]
async fn should_answer_malformed_form_body_with_json_error() {
	let client = start_test_server().await;

	let response = client
		.post("/sala")
		.form(&[("nome", "sala1"), ("capacidade", "abc"), ("descricao", "")])
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(json_body(response).await, json!({"message": "Dados da requisição inválidos :/"}));
}

#[tokio::test]
async fn should_answer_missing_query_parameter_with_json_error() {
	let client = start_test_server().await;

	let find = client.get("/sala").send().await.expect("Request failed.");
	let delete = client.delete("/sala").send().await.expect("Request failed.");

	for response in [find, delete] {
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(json_body(response).await, json!({"message": "Dados da requisição inválidos :/"}));
	}
}
