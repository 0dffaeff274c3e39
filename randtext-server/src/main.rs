use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware, put, web};

use serde::{Deserialize, Serialize};

use randtext_core::model::generator::Generator;
use randtext_core::model::suffix_model::SuffixModel;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	words: Option<usize>,
}

/// Response body for the `/v1/stats` endpoint
#[derive(Serialize)]
struct StatsResponse {
	prefix_len: usize,
	prefixes: usize,
}

struct SharedData {
	model: SuffixModel,
}

/// HTTP PUT endpoint `/v1/feed`
///
/// Feeds the request body into the shared suffix model. Observations are
/// layered onto whatever was fed before; the sliding prefix restarts for
/// each request, so separate uploads stay independent documents.
#[put("/v1/feed")]
async fn put_feed(data: web::Data<Mutex<SharedData>>, body: web::Bytes) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match shared_data.model.feed(body.as_ref()) {
		Ok(()) => HttpResponse::Ok().body("Text fed successfully"),
		Err(e) => HttpResponse::BadRequest().body(format!("Failed to feed text: {e}")),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a word sequence from the shared suffix model based on query
/// parameters. Returns the space-joined sequence as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let words = query.words.unwrap_or(100);

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match Generator::new(&shared_data.model).generate(words) {
		Ok(result) => HttpResponse::Ok().body(result.join(" ")),
		Err(e) => HttpResponse::Conflict().body(e),
	}
}

/// HTTP GET endpoint `/v1/stats`
///
/// Reports the shared model's prefix window length and the number of
/// distinct prefixes learned so far.
#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	HttpResponse::Ok().json(StatsResponse {
		prefix_len: shared_data.model.prefix_len(),
		prefixes: shared_data.model.len(),
	})
}

/// Main entry point for the server.
///
/// Creates an empty suffix model, wraps it in a `Mutex` for thread safety,
/// and starts an Actix-web HTTP server. The lock guarantees that no feed
/// interleaves with a generation or another feed on the same model.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The model lives in memory only; it starts empty on every run.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let shared_data = SharedData {
		model: SuffixModel::default(),
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	log::info!("listening on 127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.service(put_feed)
			.service(get_generated)
			.service(get_stats)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
