//! Relevance fixtures for the works domain

use rankcheck_core::cases::{OrderCase, PrecisionCase, RecallCase, TestCase};
use rankcheck_core::error::Result;

/// Every works case, in declaration order
pub fn cases() -> Result<Vec<TestCase>> {
    let mut cases = recall()?;
    cases.extend(precision()?);
    cases.extend(order()?);
    cases.extend(alternative_spellings()?);
    Ok(cases)
}

fn recall() -> Result<Vec<TestCase>> {
    Ok(vec![
        RecallCase::new(
            "indian journal of medical research 1930-1931",
            ["p444t8rp", "kccp8d5t"],
        )?
        .with_description("Most search terms (but not all) are in the title")
        .into(),
        RecallCase::new(
            "Atherosclerosis: an introduction to atherosclerosis",
            ["bcwvtknn", "rty8296y"],
        )?
        .with_description("Two works with matching titles")
        .into(),
        RecallCase::new("2013i 2599i", ["djmjw2cu", "xxskepr5"])?
            .with_description("Multiple IDs")
            .into(),
    ])
}

fn precision() -> Result<Vec<TestCase>> {
    Ok(vec![
        PrecisionCase::new("horse", ["pgwnkf2h"])?
            .with_strict(true)
            .with_description("Top hit for a single common term")
            .into(),
        PrecisionCase::new("cow", ["wm8wy47d"])?
            .with_strict(true)
            .with_description("Top hit for a single common term")
            .into(),
        PrecisionCase::new("information law", ["zkg7xqm7"])?
            .with_description(
                "Multi-word exact matches at the start of a title should be prioritised \
                 https://github.com/wellcomecollection/catalogue-api/issues/466",
            )
            .into(),
        PrecisionCase::new("UeMqQmB9", ["uemqqmb9"])?
            .with_description("Case insensitive IDs")
            .into(),
        PrecisionCase::new("10020i", ["wwsmsnp9"])?
            .with_description("Reference number as ID")
            .into(),
        PrecisionCase::new("2599i", ["xxskepr5"])?
            .with_description("Reference number as ID")
            .into(),
        PrecisionCase::new("seq88sr4 qfk4vbp8", ["seq88sr4", "qfk4vbp8"])?
            .with_description("multiple IDs")
            .into(),
        PrecisionCase::new("Cassils Time lapse", ["ftqy78zj"])?
            .with_description("Contributor and title in the same query")
            .into(),
        PrecisionCase::new("bulloch history of bacteriology", ["rkcux48q"])?
            .with_description("Contributor and title in the same query")
            .into(),
        PrecisionCase::new("stim", ["e8qxq5mv"])?
            .with_description("Exact match on title with lowercasing and punctuation stripping")
            .into(),
        PrecisionCase::new("The Piggle", ["q4drcxc6"])?
            .with_description("Example of a known title's prefix, but not the full thing")
            .with_known_failure(true)
            .into(),
        PrecisionCase::new("Das neue Naturheilverfahren", ["execg22x"])?
            .with_description("Example of a known title's prefix, but not the full thing")
            .into(),
        PrecisionCase::new("Bills of mortality", ["xwtcsk93"])?
            .with_description("Example of a known title's prefix, but not the full thing")
            .into(),
        PrecisionCase::new("L0033046", ["kmebmktz"])?
            .with_description("Miro ID matching")
            .into(),
        PrecisionCase::new("kmebmktz", ["kmebmktz"])?
            .with_description("Work ID matching")
            .into(),
        PrecisionCase::new("gzv2hhgy", ["kmebmktz"])?
            .with_description("Image ID matching")
            .into(),
        PrecisionCase::new("Oxford dictionary of national biography", ["ruedafcw"])?
            .with_description("Example of a known title's prefix, but not the full thing")
            .into(),
        PrecisionCase::new("Hunterian wa/hmm", ["f3gpbk74", "k2y5f657"])?
            .with_description("archive reference number and a word from the title")
            .into(),
        PrecisionCase::new("mammas favorites", ["dbqsn5gk"])?
            .with_description("Searching without punctuation should match a document with punctuation")
            .into(),
        PrecisionCase::new("mamma's favorites", ["dbqsn5gk"])?
            .with_description("Searching with punctuation should match a document with punctuation")
            .into(),
        PrecisionCase::new("mamma favorites", ["dbqsn5gk"])?
            .with_description(
                "Searching for a token without its possessive should match a document with",
            )
            .into(),
        PrecisionCase::new("sophies shell", ["gdfhp4gw"])?
            .with_description("Searching without punctuation should match a document with punctuation")
            .into(),
        PrecisionCase::new("sophie's shell", ["gdfhp4gw"])?
            .with_description("Searching for a term including an apostrophe should match the same term")
            .into(),
        PrecisionCase::new("The Secrets of Alchemy", ["rtdee482"])?
            .with_description("Case-insensitive partial titles")
            .into(),
    ])
}

fn order() -> Result<Vec<TestCase>> {
    Ok(vec![
        OrderCase::new(
            "stimming",
            ["e8qxq5mv", "uuem7v9a"],
            ["n323a3a4", "jktm3e74", "frgjdu67"],
        )?
        .with_description(
            "Ensure that we return non-typos over typos e.g. query:stimming \
             matches:stimming > swimming",
        )
        .with_known_failure(true)
        .into(),
        OrderCase::new(
            "Crète",
            ["yyz378xr", "d6aezcvw", "z4yefjez"],
            ["gsehqy4k", "zq2yf7uz", "d2c3k3d3"],
        )?
        .with_description(
            "Term with diacritics is scored higher than the asciifolded equivalent, \
             or versions with different diacritics",
        )
        .with_known_failure(true)
        .into(),
        OrderCase::new("horse furniture", ["kdusu63n"], ["uxcxfj9d", "fpeerby9"])?
            .with_description("Matches ordered terms ahead of unordered terms")
            .into(),
        OrderCase::new(
            "everest chest",
            ["jmt44asm", "p2yucm2e", "pr929v3m"],
            ["g44jyqgs"],
        )?
        .with_description("Matches titles over descriptions")
        .into(),
        OrderCase::new("crips", ["sgpyy6gb", "bp45sf6d"], ["ptvgbenh", "r3eue8kw"])?
            .with_description("Pluralised match appears before singular stemmed match")
            .into(),
        OrderCase::new("crip", ["ptvgbenh", "r3eue8kw"], ["sgpyy6gb", "bp45sf6d"])?
            .with_description("Exact singular match appears before pluralised match")
            .into(),
        OrderCase::new("CRIPS", ["bp45sf6d", "s949zn4f"], ["ptvgbenh", "sk78b6pr"])?
            .with_description("Capitalised match appears before lower case match")
            .into(),
        OrderCase::new(
            "AIDS",
            ["ae6cc6d9", "gvdwhbnd", "er9z8sj4", "n9xsxzg7"],
            ["gvem6rts", "tdwgsdsh", "vfwczwr7"],
        )?
        .with_description("Capitalised match appears before lower case match")
        .into(),
        OrderCase::new(
            "aid",
            ["bt9bf26e", "rgrvznhs", "v63vtprn"],
            ["ae6cc6d9", "gvdwhbnd", "er9z8sj4", "n9xsxzg7"],
        )?
        .with_description("Matches exact terms before stemmed terms")
        .into(),
        OrderCase::new("aids poster", ["t5sb3sab", "bry8xyza"], ["e8vnd4s7"])?
            .with_id("aids poster - ordered terms ahead of unordered terms")
            .with_description("Matches ordered terms ahead of unordered terms")
            .into(),
        OrderCase::new("aids poster", ["t5sb3sab"], ["fyzv7d6h"])?
            .with_id("aids poster - both terms ahead of single term")
            .with_description("Matches both terms ahead of single term")
            .with_known_failure(true)
            .into(),
        OrderCase::new(
            "x-ray",
            ["maxctjgf", "c3jatdq5", "dmcchav2", "gfp86e2b"],
            ["thgzs6pd"],
        )?
        .with_description(
            "tokens joined by hyphens are matched above tokens which are joined by whitespace",
        )
        .into(),
    ])
}

fn alternative_spellings() -> Result<Vec<TestCase>> {
    Ok(vec![
        RecallCase::new("arbeiten", ["xn7yyrqf"])?
            .with_threshold_position(1000)
            .with_description("german stemming")
            .into(),
        RecallCase::new("savoire", ["tbuwy9bk"])?
            .with_threshold_position(1000)
            .with_description("french stemming")
            .into(),
        RecallCase::new("ricerca", ["jjf2pvn5", "f7nbe4qb", "ejkxegqy", "avd99j4m"])?
            .with_threshold_position(1000)
            .with_description("italian stemming")
            .into(),
        RecallCase::new("sharh", ["frd5y363"])?
            .with_threshold_position(1000)
            .into(),
        RecallCase::new("arkaprakāśa", ["qqh7ydr3", "qb7eggtk", "jvw4bdrz", "jh46tazh"])?
            .with_threshold_position(1000)
            .into(),
        RecallCase::new(
            "Institvtio Astronomica",
            ["f8xmty8b", "mk95bet3", "ct22shvj", "mk74ws8y", "k4k3jcvx", "yp67jjj5"],
        )?
        .with_threshold_position(1000)
        .with_description("v is folded to match u in the title, but still matches v")
        .into(),
        RecallCase::new(
            "Institutio Astronomica",
            ["f8xmty8b", "mk95bet3", "ct22shvj", "mk74ws8y", "k4k3jcvx", "yp67jjj5"],
        )?
        .with_threshold_position(1000)
        .with_description("u is folded to match v in the title, but still matches u")
        .into(),
        RecallCase::new(
            "Trinvm magicvm",
            [
                "tvpt7vgd", "c3r5t5cm", "kn5f6cw3", "ynjb4wt5", "an3txmz3", "pzbrggws",
                "zz45ck2v",
            ],
        )?
        .with_threshold_position(1000)
        .with_description("v is folded to match u in the title, but still matches v")
        .into(),
        RecallCase::new(
            "Trinum magicum",
            [
                "tvpt7vgd", "c3r5t5cm", "kn5f6cw3", "ynjb4wt5", "an3txmz3", "pzbrggws",
                "zz45ck2v",
            ],
        )?
        .with_threshold_position(1000)
        .with_description("u is folded to match v in the title, but still matches u")
        .into(),
        RecallCase::new(
            "de magnis coniunctionibus",
            ["aqvdgv6m", "puj4hnsf", "qa5fa5y5", "y6qqmmeb", "m3hk4fkz"],
        )?
        .with_threshold_position(1000)
        .with_description("i is folded to match j in the title, but still matches i")
        .into(),
        RecallCase::new(
            "de magnis conjunctionibus",
            ["aqvdgv6m", "puj4hnsf", "qa5fa5y5", "y6qqmmeb", "m3hk4fkz"],
        )?
        .with_threshold_position(1000)
        .with_description("i is folded to match j in the title, but still matches i")
        .into(),
        RecallCase::new(
            "A closet for ladies and gentlewomen",
            ["dht2cvr4", "yqumcexs", "hgv9kbbg", "gm4xfbud", "pt93ab4u"],
        )?
        .with_threshold_position(1000)
        .with_description("w is folded to match vv in the title, but still matches w")
        .into(),
        RecallCase::new(
            "A closet for ladies and gentlevvomen",
            ["dht2cvr4", "yqumcexs", "hgv9kbbg", "gm4xfbud", "pt93ab4u"],
        )?
        .with_threshold_position(1000)
        .with_description("vv is folded to match w in the title, but still matches vv")
        .into(),
        RecallCase::new(
            "ioannis",
            ["drsebszt", "rw79c2br", "nubtrxbb", "cfxx7kpr", "mepptqy2", "a4sbkwqg"],
        )?
        .with_threshold_position(1000)
        .with_description(
            "i is folded to match j in the publication label, but still matches i. \
             applies to uppercase characters",
        )
        .into(),
        RecallCase::new(
            "joannis",
            ["drsebszt", "rw79c2br", "nubtrxbb", "cfxx7kpr", "mepptqy2", "a4sbkwqg"],
        )?
        .with_threshold_position(1000)
        .with_description(
            "j is folded to match i in the publication label, but still matches j. \
             applies to uppercase characters",
        )
        .with_known_failure(true)
        .into(),
        RecallCase::new("neuues", ["ker2t6s4", "m9rdjx58", "nu5dyw37"])?
            .with_threshold_position(1000)
            .with_description("uu is folded to match w and vv in the title")
            .into(),
        RecallCase::new("nevves", ["ker2t6s4", "m9rdjx58", "nu5dyw37"])?
            .with_threshold_position(1000)
            .with_description("uu is folded to match w and vv in the title")
            .into(),
        RecallCase::new("newes", ["ker2t6s4", "m9rdjx58", "nu5dyw37"])?
            .with_threshold_position(1000)
            .with_description("w is folded to match uu and vv in the title")
            .with_known_failure(true)
            .into(),
        RecallCase::new("al-tibb", ["t4jqq9ue"])?
            .with_threshold_position(1000)
            .into(),
        RecallCase::new("Al-ṭibb", ["t4jqq9ue"])?
            .with_threshold_position(1000)
            .into(),
        RecallCase::new("nuğūm", ["m94cyux7"])?
            .with_threshold_position(1000)
            .with_known_failure(true)
            .into(),
        RecallCase::new("nujum", ["m94cyux7"])?
            .with_threshold_position(1000)
            .into(),
    ])
}
