use u_tsp::aco::{AcoConfig, AcoRunner, Construction};
use u_tsp::constructive::{nearest_neighbor, probabilistic_nearest_neighbor};
use u_tsp::distance::DistanceMatrix;
use u_tsp::local_search::{two_opt_improve, TwoOptConfig};
use u_tsp::models::City;
use u_tsp::random::create_rng;
use u_tsp::report::{effectiveness, timing, Algorithm, BenchmarkConfig};
use u_tsp::spanning_tree::kruskal_mst;
use u_tsp::TspError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square() -> Vec<City> {
    vec![
        City::new(1, 0.0, 0.0),
        City::new(2, 0.0, 10.0),
        City::new(3, 10.0, 10.0),
        City::new(4, 10.0, 0.0),
    ]
}

#[test]
fn square_instance() {
    init_logger();
    let dm = DistanceMatrix::from_cities(&square()).expect("finite");
    assert_eq!(dm.get(0, 1), 10);
    assert_eq!(dm.get(0, 2), 14);

    let tour = nearest_neighbor(&dm, 0).expect("ok");
    assert_eq!(tour.route.as_slice(), &[0, 1, 2, 3, 0]);
    assert_eq!(tour.cost, 40);

    assert_eq!(kruskal_mst(&dm).cost, 30);

    let improved = two_opt_improve(&tour.route, &dm).expect("ok");
    assert_eq!(improved, tour);
}

#[test]
fn single_and_pair_instances() {
    let one = DistanceMatrix::from_cities(&[City::new(9, 4.0, 4.0)]).expect("finite");
    let tour = nearest_neighbor(&one, 0).expect("ok");
    assert_eq!(tour.into_parts(), (vec![0, 0], 0));

    let two = DistanceMatrix::from_cities(&[City::new(1, 0.0, 0.0), City::new(2, 6.0, 8.0)])
        .expect("finite");
    let tour = nearest_neighbor(&two, 0).expect("ok");
    assert_eq!(tour.route.as_slice(), &[0, 1, 0]);
    assert_eq!(tour.cost, 2 * two.get(0, 1));
    assert_eq!(tour.cost, 20);
}

#[test]
fn rounding_is_half_to_even() {
    let cities = vec![
        City::new(0, 0.0, 0.0),
        City::new(1, 0.5, 0.0),
        City::new(2, 1.5, 0.0),
        City::new(3, 4.5, 0.0),
    ];
    let dm = DistanceMatrix::from_cities(&cities).expect("finite");
    assert_eq!(dm.get(0, 1), 0);
    assert_eq!(dm.get(0, 2), 2);
    assert_eq!(dm.get(0, 3), 4);
    assert_eq!(dm.get(2, 3), 3);
}

#[test]
fn top_one_degenerates_to_nearest_neighbor() {
    let cities: Vec<City> = (0..20)
        .map(|i| City::new(i, ((i * 31) % 47) as f64, ((i * 17) % 29) as f64))
        .collect();
    let dm = DistanceMatrix::from_cities(&cities).expect("finite");
    let nn = nearest_neighbor(&dm, 7).expect("ok");
    let pnn = probabilistic_nearest_neighbor(&dm, 7, 1, &mut create_rng(1234)).expect("ok");
    assert_eq!(pnn, nn);
}

#[test]
fn pipeline_on_random_instance() {
    init_logger();
    let cities: Vec<City> = (0..40)
        .map(|i| {
            let t = i as f64;
            City::new(i, (t * 73.0) % 211.0, (t * 131.0) % 197.0)
        })
        .collect();
    let dm = DistanceMatrix::from_cities(&cities).expect("finite");
    let bound = kruskal_mst(&dm).cost;

    let config = AcoConfig::default()
        .with_n_ants(8)
        .with_n_iterations(6)
        .with_start(3)
        .with_seed(99);
    let aco = AcoRunner::run(&dm, &config).expect("ok");
    assert_eq!(aco.best.route.start(), 3);
    assert!(bound <= aco.best.cost);

    let improved = two_opt_improve(&aco.best.route, &dm).expect("ok");
    assert!(improved.cost <= aco.best.cost);
    assert!(bound <= improved.cost);
}

#[test]
fn config_from_json_uses_defaults() {
    let json = r#"{
        "n_ants": 4,
        "construction": {"rule": "pheromone_guided", "alpha": 1.0, "beta": 3.0}
    }"#;
    let config: AcoConfig = serde_json::from_str(json).expect("valid json");
    assert_eq!(config.n_ants, 4);
    assert_eq!(config.n_iterations, 10);
    assert_eq!(
        config.construction,
        Construction::PheromoneGuided {
            alpha: 1.0,
            beta: 3.0
        }
    );

    let json = r#"{"repetitions": 3, "two_opt": {"max_passes": 5}}"#;
    let bench: BenchmarkConfig = serde_json::from_str(json).expect("valid json");
    assert_eq!(bench.repetitions, 3);
    assert_eq!(bench.top_k, 2);
    assert_eq!(bench.two_opt, TwoOptConfig::default().with_max_passes(5));
}

#[test]
fn reports_cover_every_algorithm() {
    init_logger();
    let dm = DistanceMatrix::from_cities(&square()).expect("finite");
    let config = BenchmarkConfig::default().with_repetitions(3);
    let mut rng = create_rng(5);

    let quality = effectiveness(&dm, &config, &mut rng).expect("ok");
    assert_eq!(quality.mst_cost, 30);
    assert!(quality.algorithms.iter().all(|r| r.two_opt.cost == 40));

    let times = timing(&dm, &config, &mut rng).expect("ok");
    let order: Vec<Algorithm> = times.iter().map(|t| t.algorithm).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());
}

#[test]
fn errors_are_reported_eagerly() {
    let empty = DistanceMatrix::from_cities(&[]).expect("empty ok");
    assert_eq!(nearest_neighbor(&empty, 0), Err(TspError::EmptyInstance));

    let dm = DistanceMatrix::from_cities(&square()).expect("finite");
    assert_eq!(
        nearest_neighbor(&dm, 10),
        Err(TspError::InvalidStart { start: 10, size: 4 })
    );
    assert!(matches!(
        AcoRunner::run(&dm, &AcoConfig::default().with_rho(1.5)),
        Err(TspError::InvalidParameter { name: "rho", .. })
    ));
}

#[test]
fn distances_beyond_u64_are_rejected() {
    let far = [City::new(1, 0.0, 0.0), City::new(2, 1e19, 0.0)];
    assert!(matches!(
        DistanceMatrix::from_cities(&far),
        Err(TspError::DistanceOverflow { size: 2, .. })
    ));

    let near = [City::new(-1, 0.0, 0.0), City::new(-2, 1e9, 0.0)];
    let dm = DistanceMatrix::from_cities(&near).expect("fits");
    assert_eq!(nearest_neighbor(&dm, 0).expect("valid").cost, 2_000_000_000);
}
