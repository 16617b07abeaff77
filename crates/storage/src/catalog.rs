//! Bundled interview-prep content: study questions, the practice set and topics.

use prep_core::model::{
    Difficulty, PracticeQuestion, PracticeQuestionDraft, Question, QuestionDraft, QuestionError,
    QuestionId, Topic, TopicDraft, TopicError, TopicTier,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// Study questions shown by the question browser.
///
/// # Errors
///
/// Returns `QuestionError` if a bundled record is malformed.
pub fn study_questions() -> Result<Vec<Question>, QuestionError> {
    let drafts = vec![
        QuestionDraft {
            id: QuestionId::new(1),
            category: "Basics".into(),
            difficulty: Difficulty::Easy,
            prompt: "What is the difference between var, let, and const?".into(),
            tags: strings(&["variables", "scope", "hoisting"]),
            estimated_minutes: 5,
            code_sample: Some(
                r#"// var - function scoped, can be redeclared
var x = 1;
if (true) {
  var x = 2; // Same variable
  console.log(x); // 2
}
console.log(x); // 2

// let - block scoped, can be reassigned
let y = 1;
if (true) {
  let y = 2; // Different variable
  console.log(y); // 2
}
console.log(y); // 1

// const - block scoped, cannot be reassigned
const z = 1;
// z = 2; // TypeError: Assignment to constant variable
const obj = { name: 'John' };
obj.name = 'Jane'; // This works - object is mutable"#
                    .into(),
            ),
            explanation: "var is function-scoped and can be redeclared and reassigned. let is \
                block-scoped, can be reassigned but not redeclared in the same scope. const is \
                block-scoped and cannot be reassigned, but objects and arrays declared with const \
                are still mutable."
                .into(),
        },
        QuestionDraft {
            id: QuestionId::new(2),
            category: "Functions".into(),
            difficulty: Difficulty::Medium,
            prompt: "Explain closures in JavaScript with practical examples.".into(),
            tags: strings(&["closures", "scope", "functions"]),
            estimated_minutes: 8,
            code_sample: Some(
                r#"// Basic closure example
function outerFunction(x) {
  // Inner function has access to outer function's variables
  function innerFunction(y) {
    return x + y; // x is captured in closure
  }
  return innerFunction;
}

const addFive = outerFunction(5);
console.log(addFive(3)); // 8

// Practical example: Private variables
function createBankAccount(initialBalance) {
  let balance = initialBalance;

  return {
    deposit: function(amount) {
      balance += amount;
      return balance;
    },
    withdraw: function(amount) {
      if (amount <= balance) {
        balance -= amount;
        return balance;
      }
      return 'Insufficient funds';
    },
    getBalance: function() {
      return balance;
    }
  };
}

const account = createBankAccount(100);
console.log(account.deposit(50)); // 150
console.log(account.withdraw(30)); // 120
// balance is private - cannot be accessed directly"#
                    .into(),
            ),
            explanation: "A closure is when an inner function has access to variables from its \
                outer (enclosing) scope even after the outer function has returned. This creates \
                a persistent scope that allows for data privacy, function factories, and \
                maintaining state in functional programming patterns."
                .into(),
        },
        QuestionDraft {
            id: QuestionId::new(3),
            category: "Async".into(),
            difficulty: Difficulty::Hard,
            prompt: "What is the difference between Promise.all(), Promise.allSettled(), \
                Promise.race(), and Promise.any()?"
                .into(),
            tags: strings(&["promises", "async", "concurrency"]),
            estimated_minutes: 12,
            code_sample: Some(
                r#"const promise1 = Promise.resolve(1);
const promise2 = Promise.reject('Error!');
const promise3 = Promise.resolve(3);
const promise4 = new Promise(resolve => setTimeout(() => resolve(4), 1000));

// Promise.all() - fails fast, all must succeed
Promise.all([promise1, promise3, promise4])
  .then(results => console.log('All:', results)) // [1, 3, 4]
  .catch(error => console.log('All failed:', error));

// Promise.allSettled() - waits for all, regardless of outcome
Promise.allSettled([promise1, promise2, promise3])
  .then(results => console.log('AllSettled:', results));

// Promise.race() - first to settle (resolve or reject)
Promise.race([promise4, promise1])
  .then(result => console.log('Race winner:', result)); // 1

// Promise.any() - first to resolve (ignores rejections)
Promise.any([promise2, promise3, promise1])
  .then(result => console.log('Any winner:', result)); // 3"#
                    .into(),
            ),
            explanation: "Promise.all() waits for all promises to resolve and fails if any \
                reject. Promise.allSettled() waits for all to settle regardless of outcome. \
                Promise.race() returns the first promise to settle (resolve or reject). \
                Promise.any() returns the first promise to resolve, ignoring rejections unless \
                all reject."
                .into(),
        },
        QuestionDraft {
            id: QuestionId::new(4),
            category: "Objects".into(),
            difficulty: Difficulty::Medium,
            prompt: "How does prototypal inheritance work in JavaScript?".into(),
            tags: strings(&["prototype", "inheritance", "objects"]),
            estimated_minutes: 10,
            code_sample: Some(
                r#"// Constructor function approach
function Animal(name) {
  this.name = name;
}

Animal.prototype.speak = function() {
  return `${this.name} makes a sound`;
};

function Dog(name, breed) {
  Animal.call(this, name); // Call parent constructor
  this.breed = breed;
}

// Set up inheritance
Dog.prototype = Object.create(Animal.prototype);
Dog.prototype.constructor = Dog;

Dog.prototype.speak = function() {
  return `${this.name} barks`;
};

// ES6 Class syntax (syntactic sugar)
class ModernAnimal {
  constructor(name) {
    this.name = name;
  }

  speak() {
    return `${this.name} makes a sound`;
  }
}

class ModernDog extends ModernAnimal {
  speak() {
    return `${this.name} barks`;
  }
}"#
                .into(),
            ),
            explanation: "JavaScript uses prototypal inheritance where objects inherit directly \
                from other objects through the prototype chain. When a property is not found on \
                an object, JavaScript looks up the prototype chain. This can be implemented \
                using constructor functions with prototype manipulation or ES6 classes."
                .into(),
        },
        QuestionDraft {
            id: QuestionId::new(5),
            category: "Arrays".into(),
            difficulty: Difficulty::Easy,
            prompt: "What are the different ways to iterate over arrays and when to use each?"
                .into(),
            tags: strings(&["arrays", "iteration", "loops"]),
            estimated_minutes: 6,
            code_sample: Some(
                r#"const numbers = [1, 2, 3, 4, 5];

// Traditional for loop - best for performance, early exit
for (let i = 0; i < numbers.length; i++) {
  if (numbers[i] === 3) break;
  console.log(numbers[i]);
}

// for...of - clean syntax for values
for (const number of numbers) {
  console.log(number);
}

// forEach - functional approach, no return value
numbers.forEach((num, index) => console.log(`Index ${index}: ${num}`));

const doubled = numbers.map(num => num * 2); // [2, 4, 6, 8, 10]
const evens = numbers.filter(num => num % 2 === 0); // [2, 4]
const sum = numbers.reduce((acc, curr) => acc + curr, 0); // 15
const found = numbers.find(num => num > 3); // 4
const hasEven = numbers.some(num => num % 2 === 0); // true
const allPositive = numbers.every(num => num > 0); // true"#
                    .into(),
            ),
            explanation: "Use for loops for performance and early exit, for...of for clean \
                iteration over values, forEach for side effects, map for transformations, filter \
                for filtering, reduce for accumulation, find for searching, and some/every for \
                boolean checks. Choose based on your specific use case and whether you need a \
                return value."
                .into(),
        },
        QuestionDraft {
            id: QuestionId::new(6),
            category: "Async".into(),
            difficulty: Difficulty::Medium,
            prompt: "Explain async/await and how it compares to Promises and callbacks.".into(),
            tags: strings(&["async", "await", "promises", "callbacks"]),
            estimated_minutes: 9,
            code_sample: Some(
                r#"// Promises - better than callbacks but can get verbose
function fetchUserPromise(userId) {
  return fetch(`/api/users/${userId}`)
    .then(response => response.json());
}

// Async/Await - clean and readable
async function fetchUserAsync(userId) {
  try {
    const userResponse = await fetch(`/api/users/${userId}`);
    return await userResponse.json();
  } catch (error) {
    console.error('Error:', error);
    throw error;
  }
}

// Parallel execution with async/await
async function fetchMultipleUsers(userIds) {
  const userPromises = userIds.map(id => fetchUserAsync(id));
  return Promise.all(userPromises);
}"#
                .into(),
            ),
            explanation: "Async/await is syntactic sugar over Promises that makes asynchronous \
                code look synchronous. It eliminates callback hell, makes error handling easier \
                with try/catch, and improves readability. However, be careful about sequential \
                vs parallel execution - use Promise.all() for parallel operations."
                .into(),
        },
    ];

    drafts.into_iter().map(QuestionDraft::validate).collect()
}

/// The timed multiple-choice practice set.
///
/// # Errors
///
/// Returns `QuestionError` if a bundled record is malformed.
pub fn practice_questions() -> Result<Vec<PracticeQuestion>, QuestionError> {
    let drafts = vec![
        PracticeQuestionDraft {
            id: QuestionId::new(1),
            category: "Basics".into(),
            difficulty: Difficulty::Easy,
            prompt: "What will be the output of the following code?".into(),
            code_sample: Some("console.log(typeof null);".into()),
            options: strings(&["null", "undefined", "object", "boolean"]),
            correct_option: 2,
            explanation: "In JavaScript, typeof null returns \"object\". This is a well-known \
                quirk in the language and is considered a bug that cannot be fixed due to \
                backward compatibility."
                .into(),
        },
        PracticeQuestionDraft {
            id: QuestionId::new(2),
            category: "Functions".into(),
            difficulty: Difficulty::Medium,
            prompt: "What will be logged to the console?".into(),
            code_sample: Some(
                r#"function test() {
  console.log(a);
  console.log(foo());

  var a = 1;
  function foo() {
    return 2;
  }
}

test();"#
                    .into(),
            ),
            options: strings(&[
                "undefined, 2",
                "1, 2",
                "ReferenceError, 2",
                "undefined, ReferenceError",
            ]),
            correct_option: 0,
            explanation: "Due to hoisting, var declarations are moved to the top but not \
                initialized (undefined), while function declarations are fully hoisted and can \
                be called before their declaration."
                .into(),
        },
        PracticeQuestionDraft {
            id: QuestionId::new(3),
            category: "Async".into(),
            difficulty: Difficulty::Hard,
            prompt: "What is the output of this code?".into(),
            code_sample: Some(
                r#"console.log('1');

setTimeout(() => console.log('2'), 0);

Promise.resolve().then(() => console.log('3'));

console.log('4');"#
                    .into(),
            ),
            options: strings(&["1, 2, 3, 4", "1, 4, 2, 3", "1, 4, 3, 2", "1, 3, 4, 2"]),
            correct_option: 2,
            explanation: "Synchronous code runs first (1, 4), then microtasks like Promise.then \
                (3), then macrotasks like setTimeout (2). This demonstrates the event loop \
                priority."
                .into(),
        },
        PracticeQuestionDraft {
            id: QuestionId::new(4),
            category: "Objects".into(),
            difficulty: Difficulty::Medium,
            prompt: "What will this code output?".into(),
            code_sample: Some(
                r#"const obj = {
  a: 1,
  b: function() {
    console.log(this.a);
  }
};

const { b } = obj;
b();"#
                    .into(),
            ),
            options: strings(&["1", "undefined", "ReferenceError", "TypeError"]),
            correct_option: 1,
            explanation: "When the method is destructured and called as a standalone function, \
                it loses its context. \"this\" becomes undefined (in strict mode) or the global \
                object, so this.a is undefined."
                .into(),
        },
        PracticeQuestionDraft {
            id: QuestionId::new(5),
            category: "Arrays".into(),
            difficulty: Difficulty::Easy,
            prompt: "What does this code return?".into(),
            code_sample: Some("[1, 2, 3].map(parseInt)".into()),
            options: strings(&["[1, 2, 3]", "[1, NaN, NaN]", "[1, 2, NaN]", "Error"]),
            correct_option: 1,
            explanation: "map passes (element, index) to parseInt. parseInt(1,0) = 1, \
                parseInt(2,1) = NaN (base 1 invalid), parseInt(3,2) = NaN (3 invalid in base 2)."
                .into(),
        },
    ];

    drafts.into_iter().map(PracticeQuestionDraft::validate).collect()
}

/// Topic cards shown by the topic browser. Counters are sample data.
///
/// # Errors
///
/// Returns `TopicError` if a bundled record is malformed.
pub fn topics() -> Result<Vec<Topic>, TopicError> {
    let drafts = vec![
        TopicDraft {
            slug: "basics".into(),
            title: "JavaScript Basics".into(),
            description: "Fundamental concepts including variables, data types, operators, and \
                control structures."
                .into(),
            tier: TopicTier::Beginner,
            estimated_time: "2-3 hours".into(),
            question_count: 25,
            completed_count: 18,
            concepts: strings(&[
                "Variables (var, let, const)",
                "Data Types",
                "Operators",
                "Control Flow",
                "Type Coercion",
            ]),
        },
        TopicDraft {
            slug: "functions".into(),
            title: "Functions & Scope".into(),
            description: "Function declarations, expressions, arrow functions, closures, and \
                scope management."
                .into(),
            tier: TopicTier::Intermediate,
            estimated_time: "3-4 hours".into(),
            question_count: 30,
            completed_count: 12,
            concepts: strings(&[
                "Function Types",
                "Closures",
                "Scope Chain",
                "Hoisting",
                "IIFE",
                "Higher-Order Functions",
            ]),
        },
        TopicDraft {
            slug: "objects".into(),
            title: "Objects & Prototypes".into(),
            description: "Object creation, prototypal inheritance, classes, and object \
                manipulation methods."
                .into(),
            tier: TopicTier::Intermediate,
            estimated_time: "4-5 hours".into(),
            question_count: 28,
            completed_count: 8,
            concepts: strings(&[
                "Object Creation",
                "Prototypal Inheritance",
                "ES6 Classes",
                "Object Methods",
                "Property Descriptors",
            ]),
        },
        TopicDraft {
            slug: "arrays".into(),
            title: "Arrays & Iteration".into(),
            description: "Array methods, iteration techniques, and functional programming \
                concepts."
                .into(),
            tier: TopicTier::Beginner,
            estimated_time: "2-3 hours".into(),
            question_count: 22,
            completed_count: 15,
            concepts: strings(&[
                "Array Methods",
                "Iteration",
                "Map/Filter/Reduce",
                "Destructuring",
                "Spread Operator",
            ]),
        },
        TopicDraft {
            slug: "async".into(),
            title: "Asynchronous JavaScript".into(),
            description: "Promises, async/await, event loop, and handling asynchronous \
                operations."
                .into(),
            tier: TopicTier::Advanced,
            estimated_time: "5-6 hours".into(),
            question_count: 35,
            completed_count: 5,
            concepts: strings(&[
                "Promises",
                "Async/Await",
                "Event Loop",
                "Callbacks",
                "Fetch API",
                "Error Handling",
            ]),
        },
        TopicDraft {
            slug: "dom".into(),
            title: "DOM Manipulation".into(),
            description: "Document Object Model, event handling, and browser APIs.".into(),
            tier: TopicTier::Intermediate,
            estimated_time: "3-4 hours".into(),
            question_count: 26,
            completed_count: 10,
            concepts: strings(&[
                "DOM Selection",
                "Event Handling",
                "Element Manipulation",
                "Browser APIs",
                "Local Storage",
            ]),
        },
        TopicDraft {
            slug: "advanced".into(),
            title: "Advanced Concepts".into(),
            description: "Design patterns, performance optimization, and advanced JavaScript \
                techniques."
                .into(),
            tier: TopicTier::Advanced,
            estimated_time: "6-8 hours".into(),
            question_count: 32,
            completed_count: 3,
            concepts: strings(&[
                "Design Patterns",
                "Memory Management",
                "Performance",
                "Modules",
                "Generators",
                "Proxies",
            ]),
        },
        TopicDraft {
            slug: "es6plus".into(),
            title: "ES6+ Features".into(),
            description: "Modern JavaScript features including modules, destructuring, and new \
                syntax."
                .into(),
            tier: TopicTier::Intermediate,
            estimated_time: "4-5 hours".into(),
            question_count: 29,
            completed_count: 7,
            concepts: strings(&[
                "Arrow Functions",
                "Template Literals",
                "Destructuring",
                "Modules",
                "Symbols",
                "Iterators",
            ]),
        },
    ];

    drafts.into_iter().map(TopicDraft::validate).collect()
}
