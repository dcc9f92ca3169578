//! Print the wire form of representative traversals.

use grove_core::ast::builders::between;
use grove_core::Query;

fn main() {
    println!("=== Grove Wire Output ===\n");

    // Query 1: samples with a mutation in BRAF
    let gene = Query::new().mark("gene").has("symbol", "BRAF");
    let sample = Query::new()
        .mark("gene")
        .incoming("variantInGene")
        .outgoing("variantInBiosample")
        .mark("sample");
    let query1 = Query::new()
        .matching([gene, sample])
        .select(["gene", "sample"]);
    println!("Query 1: match/select");
    println!("  Wire: {}\n", query1.render().unwrap());

    // Query 2: (sample, expression) matrix for a cohort
    let query2 = Query::new()
        .has("gid", "cohort:CCLE")
        .outgoing("hasSample")
        .mark("sample")
        .incoming("expressionForSample")
        .mark("expression")
        .select(["sample", "expression"])
        .count();
    println!("Query 2: cohort expression matrix");
    println!("  Wire: {}\n", query2.render().unwrap());

    // Query 3: range condition
    let query3 = Query::new().has("age", between(1, 10)).limit(5);
    println!("Query 3: range filter");
    println!("  Wire: {}\n", query3.render().unwrap());

    // Query 4: empty query is legal
    let query4 = Query::new();
    println!("Query 4: empty");
    println!("  Wire: {}", query4.render().unwrap());
}
