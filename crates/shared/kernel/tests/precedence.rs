use tss_kernel::config::{EnvSnapshot, FlagOverrides, resolve_config};

#[test]
fn umd_name_precedence_table() {
    let cases = [
        (None, None, "myApp"),
        (None, Some("Env"), "Env"),
        (Some("Flag"), None, "Flag"),
        (Some("Flag"), Some("Env"), "Flag"),
    ];

    for (flag, env, expected) in cases {
        let flags = FlagOverrides { umd_name: flag.map(str::to_owned), is_webapp: None };
        let env = EnvSnapshot::from_pairs(env.map(|value| ("UMDNAME", value)));

        assert_eq!(
            resolve_config(&flags, &env).umd_name,
            expected,
            "flag={flag:?} env={env:?}"
        );
    }
}

#[test]
fn is_webapp_precedence_table() {
    let cases = [
        (None, None, false),
        (None, Some("true"), true),
        (Some(false), Some("true"), false),
        (Some(true), Some("false"), true),
        (Some(true), None, true),
    ];

    for (flag, env, expected) in cases {
        let flags = FlagOverrides { is_webapp: flag, umd_name: None };
        let env = EnvSnapshot::from_pairs(env.map(|value| ("ISWEBAPP", value)));

        assert_eq!(resolve_config(&flags, &env).is_webapp, expected, "flag={flag:?}");
    }
}
