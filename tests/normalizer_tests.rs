use rattendance::config::{NameCase, NormalizerConfig};
use rattendance::core::Normalizer;
use rattendance::errors::AppError;

fn normalizer() -> Normalizer {
    Normalizer::new(&NormalizerConfig::default()).expect("default config is valid")
}

fn norm(raw: &str) -> Option<String> {
    normalizer().normalize(raw).map(|e| e.to_string())
}

#[test]
fn test_strips_known_prefix() {
    assert_eq!(norm("arge*JohnDoe").as_deref(), Some("JohnDoe"));
    assert_eq!(norm("ARGE*JohnDoe").as_deref(), Some("JohnDoe"));
    assert_eq!(norm("arge-Ayşe Yılmaz").as_deref(), Some("Ayşe Yılmaz"));
    assert_eq!(norm("*Mehmet Öz").as_deref(), Some("Mehmet Öz"));
}

#[test]
fn test_strips_any_department_code() {
    assert_eq!(norm("uretim*Ali Veli").as_deref(), Some("Ali Veli"));
    assert_eq!(norm("idari-Ayse").as_deref(), Some("Ayse"));
    assert_eq!(norm("IT2*-Can Er").as_deref(), Some("Can Er"));
    assert_eq!(norm("  muhasebe* Deniz").as_deref(), Some("Deniz"));
    // a dash after a space is not a department code
    assert_eq!(norm("Ayşe Yılmaz-Kaya").as_deref(), Some("Ayşe YılmazKaya"));
}

#[test]
fn test_prefix_removal_keeps_alphanumerics() {
    assert_eq!(norm("arge*R2D2 Unit 7").as_deref(), Some("R2D2 Unit 7"));
    // only a leading token is a prefix
    assert_eq!(norm("Large Argent").as_deref(), Some("Large Argent"));
}

#[test]
fn test_removes_noise_and_collapses_whitespace() {
    assert_eq!(norm("  John   O'Brien!! ").as_deref(), Some("John OBrien"));
    assert_eq!(norm("Jane\t(Doe)").as_deref(), Some("Jane Doe"));
}

#[test]
fn test_normalization_is_idempotent() {
    let n = normalizer();
    for raw in [
        "arge*JohnDoe",
        "**arge*  Ali   Veli",
        "ARGE-*-Zeynep",
        "Çağla Şen",
        " x ",
    ] {
        let once = n.clean(raw);
        assert_eq!(n.clean(&once), once, "not idempotent for {raw:?}");
    }
}

#[test]
fn test_empty_after_stripping_is_malformed() {
    assert_eq!(norm("arge*"), None);
    assert_eq!(norm("***"), None);
    assert_eq!(norm("   "), None);
    assert_eq!(norm("!?"), None);
}

#[test]
fn test_case_normalization() {
    let cfg = NormalizerConfig {
        case: NameCase::Lower,
        ..NormalizerConfig::default()
    };
    let n = Normalizer::new(&cfg).unwrap();
    assert_eq!(n.normalize("arge*JohnDoe").unwrap().as_str(), "johndoe");

    let cfg = NormalizerConfig {
        case: NameCase::Upper,
        ..NormalizerConfig::default()
    };
    let n = Normalizer::new(&cfg).unwrap();
    assert_eq!(n.normalize("*John Doe").unwrap().as_str(), "JOHN DOE");
}

#[test]
fn test_custom_prefix_list() {
    let cfg = NormalizerConfig {
        prefixes: vec!["ext.".to_string()],
        prefix_pattern: String::new(),
        ..NormalizerConfig::default()
    };
    let n = Normalizer::new(&cfg).unwrap();
    assert_eq!(n.normalize("EXT.Maria Rossi").unwrap().as_str(), "Maria Rossi");
    // neither "arge*" nor a department pattern is configured: only the '*' goes as noise
    assert_eq!(n.normalize("arge*Maria").unwrap().as_str(), "argeMaria");
}

#[test]
fn test_excluded_keywords() {
    let n = normalizer();
    let total = n.normalize("TOPLAM").unwrap();
    let daily = n.normalize("Günlük Toplam").unwrap();
    let person = n.normalize("arge*JohnDoe").unwrap();

    assert!(n.is_excluded(&total));
    assert!(n.is_excluded(&daily));
    assert!(!n.is_excluded(&person));
}

#[test]
fn test_invalid_noise_pattern_is_rejected() {
    let cfg = NormalizerConfig {
        noise_pattern: "[unclosed".to_string(),
        ..NormalizerConfig::default()
    };
    assert!(matches!(Normalizer::new(&cfg), Err(AppError::Regex(_))));

    let cfg = NormalizerConfig {
        prefix_pattern: "^(".to_string(),
        ..NormalizerConfig::default()
    };
    assert!(matches!(Normalizer::new(&cfg), Err(AppError::Regex(_))));
}
