// Concrete rewrite stages. Each one implements `domain::ports::Stage`.

pub mod stages;
