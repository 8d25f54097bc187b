use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use stylist::advisor::prompt::{PromptContext, build_prompt};
use stylist::advisor::{Advisor, AnalysisRequest};
use stylist::models::{OutfitBreakdown, StyleRecommendation, UserProfile};
use stylist::report;

const PROFILE_JSON: &str = include_str!("../tests/fixtures/profile.json");
const OUTFIT_JSON: &str = include_str!("../tests/fixtures/outfit_wedding.json");

fn create_request(occasion: &str) -> AnalysisRequest {
    let profile: UserProfile = serde_json::from_str(PROFILE_JSON).unwrap();
    let breakdown: OutfitBreakdown = serde_json::from_str(OUTFIT_JSON).unwrap();
    AnalysisRequest::new(profile, breakdown, occasion)
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("advisor");
    let advisor = Advisor::new();

    let request = create_request("wedding_guest_indian");
    group.bench_function("recommend_single", |b| {
        b.iter(|| black_box(advisor.recommend(black_box(&request))));
    });

    let requests: Vec<_> = [
        "wedding_guest_indian",
        "western_business_formal",
        "party",
        "gym",
        "ethnic_fusion",
    ]
    .into_iter()
    .map(create_request)
    .collect();
    group.bench_function("recommend_all_occasions", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(advisor.recommend(request));
            }
        });
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let request = create_request("wedding_guest_indian");

    group.bench_function("build_prompt", |b| {
        b.iter(|| {
            let ctx = PromptContext::from_request(black_box(&request)).unwrap();
            black_box(build_prompt(&ctx))
        });
    });

    let rec = Advisor::new().recommend(&request);
    group.bench_function("render_report", |b| {
        b.iter(|| black_box(report::render(black_box(&rec))));
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    let rec = Advisor::new().recommend(&create_request("wedding_guest_indian"));

    group.bench_function("serialize_recommendation", |b| {
        b.iter(|| black_box(serde_json::to_string(&rec).unwrap()));
    });

    let json = serde_json::to_string(&rec).unwrap();
    group.bench_function("deserialize_recommendation", |b| {
        b.iter(|| black_box(serde_json::from_str::<StyleRecommendation>(&json).unwrap()));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets = bench_recommend, bench_rendering, bench_serialization
}
criterion_main!(benches);
