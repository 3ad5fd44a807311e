//! Relevance fixtures for the images domain

use rankcheck_core::cases::{PrecisionCase, RecallCase, TestCase};
use rankcheck_core::error::Result;

/// Every images case, in declaration order
pub fn cases() -> Result<Vec<TestCase>> {
    let mut cases = recall()?;
    cases.extend(precision()?);
    cases.extend(alternative_spellings()?);
    Ok(cases)
}

fn recall() -> Result<Vec<TestCase>> {
    Ok(vec![
        RecallCase::new("horse battle", ["ud35y7c8"])?.into(),
        RecallCase::new(
            "everest chest",
            [
                "bt9yvss2", "erth8sur", "fddgu7pe", "qbvq42t6", "u6ejpuxu", "xskq2fsc",
                "prrq5ajp", "zw53jx3j",
            ],
        )?
        .into(),
        RecallCase::new(
            "Frederic Cayley Robinson",
            [
                "avvynvp3", "b286u5hw", "dey48vd8", "g6n5e53n", "gcr92r4d", "gh3y9p3y",
                "vmm6hvuk", "z894cnj8", "cfgh5xqh", "fgszwax3", "hc4jc2ax", "hfyyg6y4",
                "jz4bkatc", "khw4yqzx", "npgefkju", "q3sw6v4p", "z7huxjwf", "dkj7jswg",
                "gve6469u", "kyw8ufwn", "r49f89rq", "sptagjhw", "t6jb62an", "tq4qjedt",
                "xkt8av46", "yh6evjnu", "dvg8e7h5", "knc95egk", "th8c2wan",
            ],
        )?
        .into(),
    ])
}

fn precision() -> Result<Vec<TestCase>> {
    Ok(vec![
        PrecisionCase::new("crick dna sketch", ["gzv2hhgy"])?.into(),
        PrecisionCase::new("gzv2hhgy", ["gzv2hhgy"])?
            .with_description("image id")
            .into(),
        PrecisionCase::new("kmebmktz", ["gzv2hhgy"])?
            .with_description("search for work ID and get associated images")
            .into(),
        PrecisionCase::new("L0033046", ["gzv2hhgy"])?
            .with_description("miro ID")
            .into(),
    ])
}

fn alternative_spellings() -> Result<Vec<TestCase>> {
    Ok(vec![
        RecallCase::new("arbeiten", ["sr4kxmk3", "utbtee43"])?
            .with_threshold_position(100)
            .into(),
        RecallCase::new("conosco", ["nnh3nh47"])?
            .with_threshold_position(100)
            .into(),
        RecallCase::new("allons", ["dqnapkdx"])?
            .with_threshold_position(100)
            .into(),
    ])
}
