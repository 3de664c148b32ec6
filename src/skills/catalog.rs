/// Built-in skills as `(display name, aliases)`.
pub const DEFAULT_SKILLS: &[(&str, &[&str])] = &[
    ("Python", &["python"]),
    ("Java", &["java"]),
    ("JavaScript", &["javascript"]),
    ("TypeScript", &["typescript"]),
    ("C++", &["c++", "cpp"]),
    ("C#", &["c#", "csharp"]),
    ("Go", &["golang"]),
    ("Rust", &["rust"]),
    ("Ruby", &["ruby"]),
    ("PHP", &["php"]),
    ("Kotlin", &["kotlin"]),
    ("Swift", &["swiftui", "swift for ios", "swift programming", "swift developer"]),
    ("Scala", &["scala"]),
    ("R", &["r programming", "rstudio"]),
    ("SQL", &["sql"]),
    ("HTML", &["html", "html5"]),
    ("CSS", &["css", "css3"]),
    ("React", &["react", "react.js", "reactjs"]),
    ("Angular", &["angular"]),
    ("Vue", &["vue", "vue.js", "vuejs"]),
    ("Node.js", &["node.js", "nodejs"]),
    ("Express", &["express.js", "expressjs"]),
    ("Django", &["django"]),
    ("Flask", &["flask"]),
    ("Spring", &["spring boot", "spring framework", "spring mvc"]),
    ("MongoDB", &["mongodb", "mongo"]),
    ("PostgreSQL", &["postgresql", "postgres"]),
    ("MySQL", &["mysql"]),
    ("Redis", &["redis"]),
    ("AWS", &["aws", "amazon web services"]),
    ("Azure", &["azure"]),
    ("GCP", &["gcp", "google cloud"]),
    ("Docker", &["docker"]),
    ("Kubernetes", &["kubernetes", "k8s"]),
    ("Terraform", &["terraform"]),
    ("Linux", &["linux"]),
    ("Git", &["git"]),
    ("CI/CD", &["ci/cd", "continuous integration"]),
    ("REST", &["rest api", "rest apis", "restful", "rest services"]),
    ("GraphQL", &["graphql"]),
    ("Kafka", &["kafka"]),
    ("Spark", &["apache spark", "pyspark", "spark sql"]),
    ("Machine Learning", &["machine learning", "ml"]),
    ("Deep Learning", &["deep learning"]),
    ("NLP", &["nlp", "natural language processing"]),
    ("Data Science", &["data science"]),
    ("TensorFlow", &["tensorflow"]),
    ("PyTorch", &["pytorch"]),
    ("Pandas", &["pandas"]),
    ("NumPy", &["numpy"]),
    ("Scikit-learn", &["scikit-learn", "sklearn"]),
    ("Agile", &["agile methodology", "agile development", "scrum", "kanban"]),
];
